//! Structured logging through `tracing`.
//!
//! The library only emits `tracing` events and spans; installing a subscriber
//! is left to the host. [`init_tracing`] is the subscriber the bundled binary
//! uses.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use multiselect::observability::init_tracing;
//! use multiselect::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("selector started");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

mod init;

pub use init::init_tracing;
