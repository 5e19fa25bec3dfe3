//! Dropdown selector for the risk category filter.

use crate::state::AppState;
use cgd_data::filter::RiskFilter;
use dioxus::prelude::*;

/// Risk category dropdown: All, High, Medium, Low.
/// Passes the raw option value to the FilterEngine, which rejects
/// anything it cannot parse.
#[component]
pub fn RiskSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state
        .engine
        .read()
        .as_ref()
        .map(|engine| engine.selection().risk)
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        if let Some(engine) = state.engine.write().as_mut() {
            engine.select_risk_label(&evt.value());
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "risk-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Risk Category: "
            }
            select {
                id: "risk-select",
                onchange: on_change,
                for filter in RiskFilter::OPTIONS {
                    option {
                        value: "{filter.label()}",
                        selected: filter == selected,
                        "{filter.label()}"
                    }
                }
            }
        }
    }
}
