//! Map container component with loading overlay and caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// DOM id D3 renders the map into
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 500)]
    pub min_height: u32,
    /// Attribution line under the map
    #[props(default = String::new())]
    pub caption: String,
}

/// A container div for the D3.js point map.
///
/// The map draws its own color bar on the right edge, so the container
/// only has to reserve height.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; background: #f8f8f8;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading map..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
        if !props.caption.is_empty() {
            p {
                style: "font-size: 11px; color: #888; text-align: right; margin: 2px 0 0 0;",
                "{props.caption}"
            }
        }
    }
}
