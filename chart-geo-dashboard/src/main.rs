//! COVID-19 Geo Dashboard
//!
//! Plots cleaned case records on a Web Mercator basemap with a date slider
//! and a risk category dropdown.
//!
//! Data flow:
//! 1. `build.rs` copies the cleaned case CSV (output of `cgd-cli clean`)
//!    into OUT_DIR and `include_str!` embeds it into the WASM binary.
//! 2. On mount: parse, project and classify the records into a FilterEngine
//!    starting on the earliest date with every risk category shown.
//! 3. On any engine or view mode change: rebuild the render payload and
//!    redraw via D3.js.

use cgd_cases::loader::load_clean_records;
use cgd_dashboard_ui::components::{
    ChartHeader, DateSlider, ErrorDisplay, LoadingSpinner, MapContainer, RiskSelector,
    SelectionSummary, ViewModeSelector,
};
use cgd_dashboard_ui::js_bridge;
use cgd_dashboard_ui::state::AppState;
use cgd_data::pipeline::build_engine;
use cgd_data::render::RenderPayload;
use cgd_data::style::MAP_TITLE;
use dioxus::prelude::*;

const CLEANED_CASES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cleaned_cases.csv"));

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "geo-dashboard-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("geo-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV and build the engine once on mount ───
    use_effect(move || {
        let engine = load_clean_records(CLEANED_CASES_CSV).and_then(build_engine);
        match engine {
            Ok(engine) => {
                log::info!(
                    "[CGD] Loaded {} records across {} dates",
                    engine.records().len(),
                    engine.dates().len()
                );
                state.engine.set(Some(engine));
            }
            Err(e) => {
                log::error!("[CGD] Failed to load case data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("No case data available: {}", e)));
            }
        }
        state.loading.set(false);

        js_bridge::init_map_scripts();
    });

    // ─── Effect 2: Render the current selection ───
    // Re-runs whenever loading, view_mode, or the engine's selection change.
    use_effect(move || {
        let loading = (state.loading)();
        let view_mode = (state.view_mode)();
        if loading {
            return;
        }

        let payload = match state.engine.read().as_ref() {
            Some(engine) => RenderPayload::from_engine(engine, view_mode),
            None => return,
        };
        js_bridge::render_point_map(MAP_CONTAINER_ID, &payload);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.engine.read().is_some() {
                ChartHeader {
                    title: MAP_TITLE.to_string(),
                    description: "Confirmed cases by location. Low up to 1,000, Medium up to 10,000, High above 10,000.".to_string(),
                }

                MapContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    loading: false,
                    min_height: 500,
                    caption: "Scroll to zoom, drag to pan. Hover a point for details.".to_string(),
                }

                div {
                    style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                    DateSlider {}
                    div {
                        style: "display: flex; gap: 24px; flex-wrap: wrap;",
                        RiskSelector {}
                        ViewModeSelector {}
                    }
                    SelectionSummary {}
                }
            }
        }
    }
}
