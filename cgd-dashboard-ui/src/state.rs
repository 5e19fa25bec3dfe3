//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The record set and the date/risk selection live together inside the
//! `FilterEngine`; components change the selection only through its
//! handlers, and the render effect redraws whenever the engine changes.

use cgd_data::filter::FilterEngine;
use cgd_data::style::ViewMode;
use dioxus::prelude::*;

/// Shared application state for the geo dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records plus current selection (None until loaded)
    pub engine: Signal<Option<FilterEngine>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Scatter or choropleth-style points
    pub view_mode: Signal<ViewMode>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            engine: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view_mode: Signal::new(ViewMode::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
