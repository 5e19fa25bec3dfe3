//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js map functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides Rust wrappers that serialize data and call those globals.

use cgd_data::render::RenderPayload;

// Embed the map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static POINT_MAP_JS: &str = include_str!("../assets/js/point-map.js");

/// D3 build fetched when the host page does not provide one.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CGD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is valid JS, so this handles apostrophes in place
/// names ("Cote d'Ivoire") and any other escaping.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize map scripts with a wait-for-D3 polling loop.
///
/// The script sources are stored on `window` and evaluated at global scope
/// once D3 is present, then each entry point is promoted to `window.*`.
pub fn init_map_scripts() {
    let all_js = [TOOLTIP_JS, POINT_MAP_JS].join("\n");

    let store_js = format!("window.__cgdMapScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof d3 === 'undefined' && !document.getElementById('cgd-d3')) {{
                var s = document.createElement('script');
                s.id = 'cgd-d3';
                s.src = {d3_src};
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__cgdMapScripts);
                    delete window.__cgdMapScripts;
                    if (typeof renderPointMap !== 'undefined') window.renderPointMap = renderPointMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cgdMapReady = true;
                    console.log('CGD map initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_src = js_string(D3_SRC),
    );
    let _ = js_sys::eval(&init_js);
}

/// Build the JS that renders `points_json` with `config_json` into the
/// container, once the scripts and the container are ready.
fn render_point_map_js(container_id: &str, points_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let points = js_string(points_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cgdMapReady &&
                    typeof window.renderPointMap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderPointMap({id}, {points}, {config});
                    }} catch(e) {{ console.error('[CGD] renderPointMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render the point map.
///
/// Uses a polling loop to wait for D3.js to load, map scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_point_map(container_id: &str, payload: &RenderPayload) {
    let points_json = serde_json::to_string(&payload.points).unwrap_or_default();
    let config_json = serde_json::to_string(&payload.config).unwrap_or_default();
    log::debug!(
        "[CGD] js_bridge: Rendering {} points into {}",
        payload.points.len(),
        container_id
    );
    call_js(&render_point_map_js(container_id, &points_json, &config_json));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("Cote d'Ivoire"), "\"Cote d'Ivoire\"");
        assert_eq!(js_string("a\"b\nc"), "\"a\\\"b\\nc\"");
    }

    #[test]
    fn test_render_js_embeds_quoted_arguments() {
        let js = render_point_map_js("map", r#"[{"country":"Cote d'Ivoire"}]"#, "{}");
        assert!(js.contains(r#"document.getElementById("map")"#));
        assert!(js.contains(r#"window.renderPointMap("map", "[{\"country\":\"Cote d'Ivoire\"}]", "{}")"#));
    }
}
