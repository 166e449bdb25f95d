//! Outbound events as values.
//!
//! [`Notification`] mirrors the methods of
//! [`SelectionListener`](super::SelectionListener) one-to-one. Hosts that
//! would rather queue events than react inside callbacks collect them with a
//! [`RecordingListener`](super::RecordingListener) and replay them later with
//! [`Notification::deliver`].
//!
//! # Example
//!
//! ```rust
//! use multiselect::app::{Notification, RecordingListener};
//!
//! let queued = vec![
//!     Notification::SelectionChanged(vec![1, 2]),
//!     Notification::Submitted,
//! ];
//!
//! let mut replayed = RecordingListener::new();
//! for notification in &queued {
//!     notification.deliver(&mut replayed);
//! }
//! assert_eq!(replayed.notifications(), queued.as_slice());
//! ```

use super::listener::SelectionListener;
use std::fmt;

/// One event emitted by the controller to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<K> {
    /// Full ordered selection after a change.
    SelectionChanged(Vec<K>),
    /// Header tap flipped the panel.
    PanelToggled,
    /// Back icon dismissed the panel.
    PanelCleared,
    /// Raw search input changed.
    SearchChanged(String),
    /// User asked to add an item.
    AddItemRequested,
    /// Selection submitted, panel closed.
    Submitted,
}

impl<K> Notification<K> {
    /// Invokes the matching listener method.
    pub fn deliver<L: SelectionListener<K> + ?Sized>(&self, listener: &mut L) {
        match self {
            Self::SelectionChanged(keys) => listener.on_selection_changed(keys),
            Self::PanelToggled => listener.on_panel_toggled(),
            Self::PanelCleared => listener.on_panel_cleared(),
            Self::SearchChanged(term) => listener.on_search_changed(term),
            Self::AddItemRequested => listener.on_add_item_requested(),
            Self::Submitted => listener.on_submitted(),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Notification<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionChanged(keys) => {
                f.write_str("selection-changed [")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}")?;
                }
                f.write_str("]")
            }
            Self::PanelToggled => f.write_str("panel-toggled"),
            Self::PanelCleared => f.write_str("panel-cleared"),
            Self::SearchChanged(term) => write!(f, "search-changed {term:?}"),
            Self::AddItemRequested => f.write_str("add-item-requested"),
            Self::Submitted => f.write_str("submitted"),
        }
    }
}
