//! Presentation-facing layer.
//!
//! The crate does not draw anything itself. It hands presentation layers a
//! [`SelectorView`] computed from controller state, and offers a plain-text
//! renderer for line-oriented hosts.
//!
//! ```text
//! SelectionController → compute_viewmodel → SelectorView → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable selector state
//! - [`renderer`]: Plain-text rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{
    CandidateRow, EmptyState, HeaderInfo, PanelView, SearchBarInfo, SelectorView, TagView,
};
