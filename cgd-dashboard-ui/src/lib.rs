//! Shared Dioxus components and D3.js bridge for the geo dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js point map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (slider, selectors, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
