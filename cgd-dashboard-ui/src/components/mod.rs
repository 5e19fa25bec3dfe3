//! Reusable Dioxus RSX components for the geo dashboard.

mod chart_header;
mod date_slider;
mod map_container;
mod risk_selector;
mod status;
mod view_mode_selector;

pub use chart_header::ChartHeader;
pub use date_slider::DateSlider;
pub use map_container::MapContainer;
pub use risk_selector::RiskSelector;
pub use status::{ErrorDisplay, LoadingSpinner, SelectionSummary};
pub use view_mode_selector::ViewModeSelector;
