//! Loading, error and selection status lines.

use crate::state::AppState;
use cgd_utils::dates::format_date;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading case data..."
        }
    }
}

/// "N of M records shown for DATE (RISK)" under the controls.
#[component]
pub fn SelectionSummary() -> Element {
    let state = use_context::<AppState>();
    let summary = state
        .engine
        .read()
        .as_ref()
        .map(|engine| {
            let selection = engine.selection();
            format!(
                "{} of {} records shown for {} (risk: {})",
                engine.displayed_len(),
                engine.records().len(),
                format_date(&selection.date),
                selection.risk
            )
        })
        .unwrap_or_default();

    rsx! {
        if !summary.is_empty() {
            p {
                style: "font-size: 12px; color: #555; margin: 4px 0;",
                "{summary}"
            }
        }
    }
}
