//! Host-facing callback interface.
//!
//! The controller reports every outward event through a
//! [`SelectionListener`], synchronously and in the order the events happen.
//! Each method defaults to a no-op, so hosts implement only what they need.

use super::actions::Notification;

/// Receiver for events emitted by the selection controller.
///
/// Selection changes always carry the complete ordered key list, never a
/// delta. The slice is a snapshot; hosts that keep it must copy it.
///
/// # Example
///
/// ```rust
/// use multiselect::app::SelectionListener;
///
/// #[derive(Default)]
/// struct Chosen(Vec<u32>);
///
/// impl SelectionListener<u32> for Chosen {
///     fn on_selection_changed(&mut self, keys: &[u32]) {
///         self.0 = keys.to_vec();
///     }
/// }
/// ```
pub trait SelectionListener<K> {
    /// The selection changed; `keys` is the full new selection in order.
    fn on_selection_changed(&mut self, _keys: &[K]) {}

    /// The header was tapped and the panel flipped open or closed.
    fn on_panel_toggled(&mut self) {}

    /// The panel was dismissed through the back icon.
    fn on_panel_cleared(&mut self) {}

    /// The search input changed; `term` is the raw text.
    fn on_search_changed(&mut self, _term: &str) {}

    /// The user asked to add a new item.
    fn on_add_item_requested(&mut self) {}

    /// The selection was submitted and the panel closed.
    fn on_submitted(&mut self) {}
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<K> SelectionListener<K> for NoopListener {}

/// Listener that records every event as a [`Notification`].
///
/// Useful for hosts that prefer to drain events after each input, and for
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingListener<K> {
    notifications: Vec<Notification<K>>,
}

impl<K> Default for RecordingListener<K> {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }
}

impl<K> RecordingListener<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification<K>] {
        &self.notifications
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<Notification<K>> {
        std::mem::take(&mut self.notifications)
    }
}

impl<K: Clone> SelectionListener<K> for RecordingListener<K> {
    fn on_selection_changed(&mut self, keys: &[K]) {
        self.notifications
            .push(Notification::SelectionChanged(keys.to_vec()));
    }

    fn on_panel_toggled(&mut self) {
        self.notifications.push(Notification::PanelToggled);
    }

    fn on_panel_cleared(&mut self) {
        self.notifications.push(Notification::PanelCleared);
    }

    fn on_search_changed(&mut self, term: &str) {
        self.notifications
            .push(Notification::SearchChanged(term.to_string()));
    }

    fn on_add_item_requested(&mut self) {
        self.notifications.push(Notification::AddItemRequested);
    }

    fn on_submitted(&mut self) {
        self.notifications.push(Notification::Submitted);
    }
}

impl<K, L: SelectionListener<K> + ?Sized> SelectionListener<K> for &mut L {
    fn on_selection_changed(&mut self, keys: &[K]) {
        (**self).on_selection_changed(keys);
    }

    fn on_panel_toggled(&mut self) {
        (**self).on_panel_toggled();
    }

    fn on_panel_cleared(&mut self) {
        (**self).on_panel_cleared();
    }

    fn on_search_changed(&mut self, term: &str) {
        (**self).on_search_changed(term);
    }

    fn on_add_item_requested(&mut self) {
        (**self).on_add_item_requested();
    }

    fn on_submitted(&mut self) {
        (**self).on_submitted();
    }
}
