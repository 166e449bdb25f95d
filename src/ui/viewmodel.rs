//! View model types representing renderable selector state.
//!
//! View models are computed from the controller with
//! [`SelectionController::compute_viewmodel`](crate::app::SelectionController::compute_viewmodel)
//! and carry everything a presentation layer needs: labels, selected and
//! disabled flags, which affordances to offer. They contain no logic.
//!
//! # Example
//!
//! ```rust
//! use multiselect::ui::viewmodel::{HeaderInfo, SelectorView};
//!
//! let vm: SelectorView<u32> = SelectorView {
//!     header: HeaderInfo { label: "Select".to_string(), selected_count: 0 },
//!     panel: None,
//!     tags: vec![],
//! };
//! assert!(vm.panel.is_none());
//! ```

use crate::app::modes::SubmitAffordance;

/// Complete selector view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView<K> {
    /// Header shown while closed; tapping it toggles the panel.
    pub header: HeaderInfo,

    /// Open panel contents, `None` while closed.
    pub panel: Option<PanelView<K>>,

    /// Selected-item tags in selection order (closed, multi mode only).
    pub tags: Vec<TagView<K>>,
}

/// Header text and selection count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// `"Select"` or `"Select (2 selected)"`, from the configured texts.
    pub label: String,

    pub selected_count: usize,
}

/// Contents of the open panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<K> {
    pub search_bar: SearchBarInfo,

    /// Candidate rows in render order.
    pub rows: Vec<CandidateRow<K>>,

    /// Placeholder replacing `rows` when no candidate is left.
    pub empty_state: Option<EmptyState>,

    /// Submit affordance to offer, `None` in single mode.
    pub submit: Option<SubmitAffordance>,

    pub show_back_icon: bool,

    pub show_add_item: bool,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// One candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow<K> {
    /// Item key, `None` for records with a misconfigured key field.
    pub key: Option<K>,

    pub label: String,

    /// Whether the row shows the selected check mark.
    pub is_selected: bool,

    /// Whether the row is greyed out and ignores taps.
    pub is_disabled: bool,
}

/// Empty candidate list placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Tag for one selected key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView<K> {
    pub key: K,

    /// Label of the item carrying this key; `None` if no current item has it.
    pub label: Option<String>,
}
