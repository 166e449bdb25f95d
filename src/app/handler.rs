//! Inbound event handling.
//!
//! The view layer reports raw user gestures as [`Event`]s; [`handle_event`]
//! maps each one to exactly one controller transition. The handler holds no
//! state of its own and never fails.
//!
//! # Event Mapping
//!
//! | Event | Controller operation |
//! |---|---|
//! | `ItemTapped(item)` | [`toggle_item`](SelectionController::toggle_item) |
//! | `HeaderTapped` | [`toggle_panel`](SelectionController::toggle_panel) |
//! | `SearchTextChanged(text)` | [`set_search_term`](SelectionController::set_search_term) |
//! | `BackIconTapped` | [`close_panel`](SelectionController::close_panel) |
//! | `SubmitTapped` | [`submit`](SelectionController::submit) |
//! | `TagRemoveTapped(key)` | [`remove_item`](SelectionController::remove_item) |
//! | `AddItemTapped` | [`request_add_item`](SelectionController::request_add_item) |
//!
//! # Example
//!
//! ```rust
//! use multiselect::app::{handle_event, Event, RecordingListener, SelectionController};
//! use multiselect::Config;
//!
//! let mut controller = SelectionController::<u32, _>::new(Config::default(), RecordingListener::new());
//! let should_render = handle_event(&mut controller, &Event::HeaderTapped);
//! assert!(should_render);
//! assert!(controller.is_open());
//! ```

use super::listener::SelectionListener;
use super::state::SelectionController;
use crate::domain::Item;
use std::fmt;

/// Raw user gestures reported by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<K> {
    /// A candidate row was tapped.
    ItemTapped(Item<K>),
    /// The closed header was tapped.
    HeaderTapped,
    /// The search input text changed.
    SearchTextChanged(String),
    /// The back icon in the open panel was tapped.
    BackIconTapped,
    /// The submit button or indicator was tapped.
    SubmitTapped,
    /// The remove icon on a selected-item tag was tapped.
    TagRemoveTapped(K),
    /// The add-item affordance was tapped.
    AddItemTapped,
}

/// Applies an event to the controller.
///
/// # Returns
///
/// `true` if the controller changed and the view should re-render; `false`
/// if the event was ignored (disabled item, search while closed, and so on).
///
/// # Tracing
///
/// Each call runs inside a debug-level span carrying the event.
pub fn handle_event<K, L>(controller: &mut SelectionController<K, L>, event: &Event<K>) -> bool
where
    K: Clone + PartialEq + fmt::Debug,
    L: SelectionListener<K>,
{
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let should_render = match event {
        Event::ItemTapped(item) => controller.toggle_item(item),
        Event::HeaderTapped => controller.toggle_panel(),
        Event::SearchTextChanged(text) => controller.set_search_term(text.as_str()),
        Event::BackIconTapped => controller.close_panel(),
        Event::SubmitTapped => controller.submit(),
        Event::TagRemoveTapped(key) => controller.remove_item(key),
        Event::AddItemTapped => controller.request_add_item(),
    };

    if !should_render {
        tracing::debug!("event ignored");
    }
    should_render
}
