//! Infrastructure layer for filesystem interactions.
//!
//! Reads item records (JSON) and selector configuration (TOML) for hosts
//! that keep them in files, such as the bundled binary.

pub mod loader;

pub use loader::{load_config, load_items, parse_items};
