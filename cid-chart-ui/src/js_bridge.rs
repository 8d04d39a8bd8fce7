//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is injected from its CDN on startup. The bridge functions in
//! `assets/js/plotly-bridge.js` are evaluated as globals once Plotly is
//! loaded and exposed via `window.*`. This module serializes figures and
//! calls those globals, and forwards hover events back into Rust.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed the bridge JS at compile time
static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Plotly.js bundle injected when the page does not already provide one.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CID JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a string for embedding inside a single-quoted JS literal.
pub fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Inject Plotly.js if needed and evaluate the bridge once it is ready.
///
/// The bridge defines functions like `renderFigure(...)` via `function`
/// declarations. To make them globally accessible (not block-scoped inside
/// the setInterval callback), they are evaluated with an indirect `eval`
/// and then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__cidChartScripts = {};",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof Plotly === 'undefined' && !document.getElementById('cid-plotly-js')) {{
                var script = document.createElement('script');
                script.id = 'cid-plotly-js';
                script.src = '{PLOTLY_CDN_URL}';
                document.head.appendChild(script);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__cidChartScripts);
                    delete window.__cidChartScripts;
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof bindHover !== 'undefined') window.bindHover = bindHover;
                    window.__cidChartsReady = true;
                    console.log('CID charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until the bridge is ready and the container exists, then run `body`.
fn when_ready(container_id: &str, function: &str, body: &str) {
    let container_id = escape_js(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cidChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        {body}
                    }} catch(e) {{ console.error('[CID] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a Plotly figure (JSON `{data, layout, frames}`) into a container.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let body = format!(
        "window.renderFigure('{}', '{}');",
        escape_js(container_id),
        escape_js(figure_json)
    );
    when_ready(container_id, "renderFigure", &body);
}

/// Forward `plotly_hover` events of a container to the hover handler.
///
/// Binding is idempotent per element.
pub fn bind_hover(container_id: &str) {
    let body = format!("window.bindHover('{}');", escape_js(container_id));
    when_ready(container_id, "bindHover", &body);
}

/// Install the Rust function receiving `(container_id, payload_json)` for
/// every forwarded hover event. Replaces any previous handler.
pub fn set_hover_handler<F>(handler: F)
where
    F: FnMut(String, String) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(String, String)>);
    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(
                &window,
                &JsValue::from_str("__cidOnHover"),
                closure.as_ref().unchecked_ref(),
            )
            .is_err()
            {
                log::warn!("[CID] could not install hover handler");
            }
        }
        None => log::warn!("[CID] no window; hover events disabled"),
    }
    // The handler lives as long as the page.
    closure.forget();
}
