//! Slider over the distinct dates in the record set.

use crate::state::AppState;
use cgd_utils::dates::format_date;
use dioxus::prelude::*;

/// Date slider.
/// Each stop is one distinct date; moving it selects that date in the
/// FilterEngine. Values the engine does not know are logged and ignored.
#[component]
pub fn DateSlider() -> Element {
    let mut state = use_context::<AppState>();
    let (dates, index) = match state.engine.read().as_ref() {
        Some(engine) => (engine.dates().to_vec(), engine.date_index()),
        None => (Vec::new(), 0),
    };

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        match value.parse::<usize>() {
            Ok(index) => {
                if let Some(engine) = state.engine.write().as_mut() {
                    engine.select_date_index(index);
                }
            }
            Err(e) => log::warn!("[CGD] slider: Ignoring value {:?}: {}", value, e),
        }
    };

    if dates.is_empty() {
        return rsx! {};
    }
    let max_index = dates.len() - 1;
    let selected = format_date(&dates[index.min(max_index)]);
    let first = format_date(&dates[0]);
    let last = format_date(&dates[max_index]);

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "date-slider",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Date: {selected}"
            }
            input {
                id: "date-slider",
                r#type: "range",
                min: "0",
                max: "{max_index}",
                step: "1",
                value: "{index}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                span { "{first}" }
                span { "{last}" }
            }
        }
    }
}
