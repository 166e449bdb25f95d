//! File loading for item records and selector configuration.
//!
//! # File Formats
//!
//! Items are a JSON array of objects:
//!
//! ```json
//! [
//!   { "_id": 1, "name": "Apple" },
//!   { "_id": 2, "name": "Banana", "disabled": true }
//! ]
//! ```
//!
//! Configuration is a TOML document of [`Config`] fields, every one optional.

use crate::domain::error::{MultiSelectError, Result};
use crate::domain::item::{FieldNames, Item, ItemKey};
use crate::Config;
use serde_json::Value;
use std::path::Path;

/// Loads item records from a JSON file.
///
/// Each array element is converted with [`Item::from_record`], so records
/// missing the key field still load (and log a warning).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not valid JSON
/// - The top-level value is not an array
///
/// # Examples
///
/// ```no_run
/// use multiselect::infrastructure::load_items;
/// use multiselect::FieldNames;
///
/// let items = load_items("items.json", &FieldNames::default())?;
/// # Ok::<(), multiselect::MultiSelectError>(())
/// ```
pub fn load_items(path: impl AsRef<Path>, fields: &FieldNames) -> Result<Vec<Item<ItemKey>>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading items");

    let contents = std::fs::read_to_string(path)?;
    let items = parse_items(&contents, fields)?;

    tracing::debug!(count = items.len(), "items loaded");
    Ok(items)
}

/// Parses item records from a JSON string.
///
/// # Errors
///
/// Returns [`MultiSelectError::Json`] for malformed JSON and
/// [`MultiSelectError::Config`] when the document is not an array.
pub fn parse_items(source: &str, fields: &FieldNames) -> Result<Vec<Item<ItemKey>>> {
    let document: Value = serde_json::from_str(source)?;
    let Value::Array(records) = document else {
        return Err(MultiSelectError::Config(
            "item file must contain a JSON array of records".to_string(),
        ));
    };

    Ok(records
        .iter()
        .map(|record| Item::from_record(record, fields))
        .collect())
}

/// Loads and validates a TOML configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails
/// [`Config::from_toml_str`].
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading config");
    let contents = std::fs::read_to_string(path)?;
    Config::from_toml_str(&contents)
}
