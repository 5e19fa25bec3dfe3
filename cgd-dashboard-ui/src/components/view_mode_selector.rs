//! Toggle between plain scatter points and intensity-colored points.

use crate::state::AppState;
use cgd_data::style::ViewMode;
use dioxus::prelude::*;

#[component]
pub fn ViewModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.view_mode)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<ViewMode>() {
        Ok(mode) => state.view_mode.set(mode),
        Err(e) => log::warn!("[CGD] view mode: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "view-mode-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Style: "
            }
            select {
                id: "view-mode-select",
                onchange: on_change,
                for mode in ViewMode::OPTIONS {
                    option {
                        value: "{mode.label()}",
                        selected: mode == current,
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
