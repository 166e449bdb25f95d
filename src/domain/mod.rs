//! Domain layer for the multiselect crate.
//!
//! Holds the item model shared by every layer and the crate's error type. Items
//! are supplied by the host and never mutated by the core.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Selectable item model and record extraction
//!
//! # Examples
//!
//! ```
//! use multiselect::domain::Item;
//!
//! let apple = Item::new(1, "Apple");
//! let banana = Item::new(2, "Banana").disabled();
//! assert!(!apple.disabled);
//! assert!(banana.disabled);
//! ```

pub mod error;
pub mod item;

pub use error::{MultiSelectError, Result};
pub use item::{FieldNames, Item, ItemKey};
