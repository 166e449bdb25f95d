//! Multiselect: the selection and filter state machine behind a selectable-list control.
//!
//! The crate provides:
//! - Single- and multi-selection with insertion-ordered keys
//! - Case-insensitive, always-literal search filtering in partial or full mode
//! - Candidate list computation with optional removal of selected items
//! - An open/closed panel state machine that reports to its host through a listener
//! - Render-ready view models for any presentation layer

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host binary (main.rs)                              │  ← stdin commands
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - handler: inbound events → controller operations  │
//! │  - state: SelectionController (panel, search, keys) │  ← State machine
//! │  - candidates / filter / selection                  │  ← Pure logic
//! │  - listener / actions: outbound host notifications  │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐        ┌───────────────────────┐
//! │ UI Layer (ui/)        │        │ Infrastructure        │
//! │ - View models         │        │ - JSON item records   │
//! │ - Plain-text renderer │        │ - TOML configuration  │
//! └───────────────────────┘        └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Item, ItemKey, errors            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selection state machine, filtering and host notifications
//! - [`domain`]: Item model and error types
//! - [`infrastructure`]: Loading item records and configuration files
//! - [`ui`]: View models and text rendering
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! single = false
//! remove_selected = true
//! match_mode = "partial"
//! unique_key = "id"
//! display_key = "name"
//! submit_affordance = "button"
//! ```
//!
//! # Example
//!
//! ```rust
//! use multiselect::{initialize, Config, Item, RecordingListener};
//!
//! let items = vec![Item::new(1, "Apple"), Item::new(2, "Banana")];
//! let mut controller = initialize(&Config::default(), RecordingListener::new());
//!
//! controller.toggle_item(&items[0]);
//! controller.toggle_item(&items[1]);
//! controller.toggle_item(&items[0]);
//! assert_eq!(controller.selected_keys(), &[2]);
//!
//! controller.open_panel();
//! controller.set_search_term("ban");
//! let candidates = controller.candidates(&items);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].label(), "Banana");
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Event, MatchMode, NoopListener, Notification, PanelState, RecordingListener,
    SelectionController, SelectionListener, SelectionMode, SelectionSet, SubmitAffordance,
};
pub use domain::{FieldNames, Item, ItemKey, MultiSelectError, Result};
pub use ui::SelectorView;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Selector configuration, fixed for the lifetime of a controller.
///
/// Deserialized from TOML with every field optional, or built from string
/// `key=value` options with [`Config::from_options`].
///
/// # Example
///
/// ```toml
/// single = true
/// match_mode = "full"
/// unique_key = "id"
/// display_key = "meta.title"
/// no_items_text = "Nothing here."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Restricts the selection to at most one key; picking an item submits.
    pub single: bool,

    /// Excludes already-selected items from the candidate list.
    pub remove_selected: bool,

    /// Search tokenization strategy. Default: `partial`.
    pub match_mode: MatchMode,

    /// Record field holding each item's unique key. Default: `"_id"`.
    pub unique_key: String,

    /// Record field (or dotted path) holding each item's label. Default: `"name"`.
    pub display_key: String,

    /// How the explicit multi-mode submit is offered. Default: `button`.
    pub submit_affordance: SubmitAffordance,

    /// Hides the back icon in the open panel.
    pub hide_back_icon: bool,

    /// Offers an add-item affordance and allows add-item requests.
    pub can_add_items: bool,

    /// Hides selected-item tags under the closed header (multi mode).
    pub hide_tags: bool,

    /// Header text. Default: `"Select"`.
    pub select_text: String,

    /// Suffix for the selected count in the header. Default: `"selected"`.
    pub selected_text: String,

    /// Placeholder shown when no candidate matches. Default: `"No items to display."`.
    pub no_items_text: String,

    /// Search input placeholder. Default: `"Search"`.
    pub search_placeholder: String,

    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"warn"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            single: false,
            remove_selected: false,
            match_mode: MatchMode::Partial,
            unique_key: domain::item::DEFAULT_UNIQUE_KEY.to_string(),
            display_key: domain::item::DEFAULT_DISPLAY_KEY.to_string(),
            submit_affordance: SubmitAffordance::Button,
            hide_back_icon: false,
            can_add_items: false,
            hide_tags: false,
            select_text: "Select".to_string(),
            selected_text: "selected".to_string(),
            no_items_text: "No items to display.".to_string(),
            search_placeholder: "Search".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MultiSelectError::Toml`] for malformed TOML or unknown keys,
    /// and [`MultiSelectError::Config`] for empty field names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use multiselect::{Config, MatchMode};
    ///
    /// let config = Config::from_toml_str("single = true\nmatch_mode = \"full\"")?;
    /// assert!(config.single);
    /// assert_eq!(config.match_mode, MatchMode::Full);
    /// # Ok::<(), multiselect::MultiSelectError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from string options on top of the defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::apply_options`].
    pub fn from_options(options: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();
        config.apply_options(options)?;
        Ok(config)
    }

    /// Overrides fields from a string option map.
    ///
    /// Hosts that receive configuration as plain strings (command-line
    /// `key=value` pairs, component properties) pass them here.
    ///
    /// # Parsing Rules
    ///
    /// - Booleans: `true`/`false`, `yes`/`no`, `1`/`0` (case-insensitive)
    /// - `match_mode`: `partial` or `full`
    /// - `submit_affordance`: `button` or `indicator`
    /// - Text fields are taken verbatim
    /// - Unknown keys are logged and ignored
    ///
    /// # Errors
    ///
    /// Returns [`MultiSelectError::Config`] when a value cannot be parsed or
    /// a field name ends up empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use multiselect::{Config, SubmitAffordance};
    ///
    /// let mut options = BTreeMap::new();
    /// options.insert("single".to_string(), "yes".to_string());
    /// options.insert("submit_affordance".to_string(), "indicator".to_string());
    ///
    /// let config = Config::from_options(&options)?;
    /// assert!(config.single);
    /// assert_eq!(config.submit_affordance, SubmitAffordance::Indicator);
    /// # Ok::<(), multiselect::MultiSelectError>(())
    /// ```
    pub fn apply_options(&mut self, options: &BTreeMap<String, String>) -> Result<()> {
        for (key, value) in options {
            match key.as_str() {
                "single" => self.single = parse_bool(key, value)?,
                "remove_selected" => self.remove_selected = parse_bool(key, value)?,
                "hide_back_icon" => self.hide_back_icon = parse_bool(key, value)?,
                "can_add_items" => self.can_add_items = parse_bool(key, value)?,
                "hide_tags" => self.hide_tags = parse_bool(key, value)?,
                "match_mode" => self.match_mode = parse_enum(value)?,
                "submit_affordance" => self.submit_affordance = parse_enum(value)?,
                "unique_key" => self.unique_key.clone_from(value),
                "display_key" => self.display_key.clone_from(value),
                "select_text" => self.select_text.clone_from(value),
                "selected_text" => self.selected_text.clone_from(value),
                "no_items_text" => self.no_items_text.clone_from(value),
                "search_placeholder" => self.search_placeholder.clone_from(value),
                "trace_level" => self.trace_level = Some(value.clone()),
                _ => tracing::warn!(option = %key, "ignoring unknown option"),
            }
        }
        self.validate()
    }

    /// Checks invariants that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`MultiSelectError::Config`] if `unique_key` or `display_key` is blank.
    pub fn validate(&self) -> Result<()> {
        if self.unique_key.trim().is_empty() {
            return Err(MultiSelectError::Config("unique_key must not be empty".to_string()));
        }
        if self.display_key.trim().is_empty() {
            return Err(MultiSelectError::Config("display_key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Field names for extracting items from raw records.
    #[must_use]
    pub fn field_names(&self) -> FieldNames {
        FieldNames::new(self.unique_key.clone(), self.display_key.clone())
    }

    #[must_use]
    pub const fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_single(self.single)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(MultiSelectError::Config(format!(
            "option '{key}' expects a boolean, got '{value}'"
        ))),
    }
}

fn parse_enum<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(MultiSelectError::Config)
}

/// Creates a controller for the given configuration.
///
/// Logs the effective selection mode and match mode. The selection starts
/// empty and the panel closed.
///
/// # Example
///
/// ```rust
/// use multiselect::{initialize, Config, NoopListener};
///
/// let controller = initialize::<u32, _>(&Config::default(), NoopListener);
/// assert!(!controller.is_open());
/// ```
pub fn initialize<K, L>(config: &Config, listener: L) -> SelectionController<K, L>
where
    K: Clone + PartialEq + std::fmt::Debug,
    L: SelectionListener<K>,
{
    tracing::debug!(
        mode = ?config.selection_mode(),
        match_mode = ?config.match_mode,
        remove_selected = config.remove_selected,
        "initializing selection controller"
    );
    SelectionController::new(config.clone(), listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml_str("").expect("empty document parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.field_names(), FieldNames::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = Config::from_toml_str(
            r#"
            single = true
            remove_selected = true
            match_mode = "full"
            unique_key = "id"
            display_key = "meta.title"
            submit_affordance = "indicator"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.selection_mode(), SelectionMode::Single);
        assert!(config.remove_selected);
        assert_eq!(config.match_mode, MatchMode::Full);
        assert_eq!(config.field_names(), FieldNames::new("id", "meta.title"));
        assert_eq!(config.submit_affordance, SubmitAffordance::Indicator);
    }

    #[test]
    fn toml_rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            Config::from_toml_str("singel = true"),
            Err(MultiSelectError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("match_mode = \"fuzzy\""),
            Err(MultiSelectError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("unique_key = \"  \""),
            Err(MultiSelectError::Config(_))
        ));
    }

    #[test]
    fn options_parse_booleans_and_enums() {
        let config = Config::from_options(&options(&[
            ("single", "TRUE"),
            ("remove_selected", "1"),
            ("hide_tags", "no"),
            ("match_mode", "full"),
            ("select_text", "Pick"),
        ]))
        .expect("valid options");

        assert!(config.single);
        assert!(config.remove_selected);
        assert!(!config.hide_tags);
        assert_eq!(config.match_mode, MatchMode::Full);
        assert_eq!(config.select_text, "Pick");
    }

    #[test]
    fn options_reject_invalid_values() {
        let err = Config::from_options(&options(&[("single", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("single"));

        assert!(Config::from_options(&options(&[("match_mode", "fuzzy")])).is_err());
        assert!(Config::from_options(&options(&[("display_key", "")])).is_err());
    }

    #[test]
    fn unknown_options_are_ignored() {
        let config = Config::from_options(&options(&[("colour", "red")])).expect("ignored");
        assert_eq!(config, Config::default());
    }
}
