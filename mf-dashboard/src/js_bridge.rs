//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart code lives in `assets/js/consumption-chart.js`, is
//! embedded at compile time and evaluated as a global once D3 has loaded.
//! This module provides safe Rust wrappers that pass the serialized
//! figure to that global.

static CONSUMPTION_CHART_JS: &str = include_str!("../assets/js/consumption-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MF JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script defines `renderConsumptionChart(...)` via a `function`
/// declaration. To make it globally accessible (not block-scoped inside
/// the setInterval callback), the source is stashed on `window`, evaluated
/// at global scope via indirect eval once D3 is ready, and the function is
/// then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__mfChartScripts = {};",
        serde_json::to_string(CONSUMPTION_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__mfChartScripts);
                    delete window.__mfChartScripts;
                    if (typeof renderConsumptionChart !== 'undefined') {
                        window.renderConsumptionChart = renderConsumptionChart;
                    }
                    window.__mfChartsReady = true;
                    console.log('MF charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a consumption figure into the given container.
///
/// Polls until D3 has loaded, the chart script has initialized and the
/// container DOM element exists, then draws. A figure with zero series is
/// rendered as an empty plot, never an error.
pub fn render_consumption_chart(container_id: &str, figure_json: &str) {
    let escaped = figure_json.replace('\\', "\\\\").replace('\'', "\\'");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mfChartsReady &&
                    typeof window.renderConsumptionChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderConsumptionChart('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[MF] renderConsumptionChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
