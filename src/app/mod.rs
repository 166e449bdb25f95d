//! Application layer: the selection/filter state machine.
//!
//! This module holds all of the selector's logic, between the view layer that
//! reports gestures and the host that consumes selection results.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! View gesture → Event → handle_event → SelectionController transition
//!                                             │             │
//!                              SelectionListener      compute_viewmodel
//!                              (host callbacks)       (render-ready state)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Search-term matching (partial and full modes)
//! - [`selection`]: Ordered key set with single/multi semantics
//! - [`candidates`]: Filter + selection → list to render
//! - [`modes`]: Panel state and submit affordance types
//! - [`state`]: The controller owning panel, search term and selection
//! - [`handler`]: Inbound event dispatch
//! - [`listener`]: Host callback interface
//! - [`actions`]: Outbound events as values

pub mod actions;
pub mod candidates;
pub mod filter;
pub mod handler;
pub mod listener;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Notification;
pub use filter::MatchMode;
pub use handler::{handle_event, Event};
pub use listener::{NoopListener, RecordingListener, SelectionListener};
pub use modes::{PanelState, SubmitAffordance};
pub use selection::{SelectionMode, SelectionSet, ToggleOutcome};
pub use state::SelectionController;
