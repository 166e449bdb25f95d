//! Error types for the multiselect crate.
//!
//! This module defines the centralized error type [`MultiSelectError`] and a type
//! alias [`Result`]. Errors only arise at the edges of the crate: reading item
//! records and configuration. The selection state machine itself never fails;
//! configuration mismatches inside it degrade behavior and are logged instead.

use thiserror::Error;

/// The main error type for loading and configuring a selector.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use multiselect::MultiSelectError;
///
/// fn validate_field(name: &str) -> Result<(), MultiSelectError> {
///     if name.is_empty() {
///         return Err(MultiSelectError::Config("field name is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_field("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum MultiSelectError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Item records could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed as TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid.
    ///
    /// Occurs when an option value cannot be parsed or a field name is empty.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for multiselect operations.
pub type Result<T> = std::result::Result<T, MultiSelectError>;
