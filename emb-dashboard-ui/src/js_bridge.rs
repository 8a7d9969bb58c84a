//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js render functions live in `assets/js/charts.js` and are loaded at
//! runtime. Chart.js itself is loaded by the host page, so the scripts are
//! only evaluated once the global `Chart` exists, and every render call polls
//! until both the scripts and its container element are ready.

use emb_data::charts::{DistributionChart, ModalChart, TrendChart, VolumeChart};
use serde::Serialize;

static CHARTS_JS: &str = include_str!("../assets/js/charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart scripts once Chart.js is available. Idempotent.
///
/// The scripts define `function` declarations; evaluating them with an
/// indirect eval keeps them at global scope, after which each one is
/// promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__embChartsReady && !window.__embChartScripts) {{ window.__embChartScripts = {}; }}",
        serde_json::to_string(CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__embChartsReady || window.__embChartsWaiting) return;
            window.__embChartsWaiting = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__embChartScripts);
                    delete window.__embChartScripts;
                    if (typeof renderDistributionChart !== 'undefined') window.renderDistributionChart = renderDistributionChart;
                    if (typeof renderVolumeChart !== 'undefined') window.renderVolumeChart = renderVolumeChart;
                    if (typeof renderModalChart !== 'undefined') window.renderModalChart = renderModalChart;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    window.__embChartsReady = true;
                    delete window.__embChartsWaiting;
                    console.log('Dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Serialise `payload` and call `window.<function>(container_id, payload)`
/// once the scripts and the container exist.
fn render_when_ready<T: Serialize>(function: &str, container_id: &str, payload: &T) {
    // JSON is a valid JS expression, so it is spliced in as an object literal.
    let payload_js = match serde_json::to_string(payload) {
        Ok(json) => json
            .replace('\u{2028}', "\\u2028")
            .replace('\u{2029}', "\\u2029"),
        Err(e) => {
            log::error!("js_bridge: failed to serialise {} payload: {}", function, e);
            return;
        }
    };
    call_js(&render_script(function, container_id, &payload_js));
}

/// Pending renders are kept per container in `window.__embChartPolls`, so a
/// newer render or a destroy cancels the one still waiting.
fn render_script(function: &str, container_id: &str, payload_js: &str) -> String {
    format!(
        r#"
        (function() {{
            var payload = {payload_js};
            var polls = window.__embChartPolls = window.__embChartPolls || {{}};
            if (polls['{container_id}']) clearInterval(polls['{container_id}']);
            var poll = polls['{container_id}'] = setInterval(function() {{
                if (window.__embChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    if (polls['{container_id}'] === poll) delete polls['{container_id}'];
                    try {{
                        window.{function}('{container_id}', payload);
                    }} catch(e) {{ console.error('[Dashboard] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "(function() {{ var polls = window.__embChartPolls; \
         if (polls && polls['{0}']) {{ clearInterval(polls['{0}']); delete polls['{0}']; }} \
         if (window.destroyChart) {{ window.destroyChart('{0}'); }} \
         else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }} }})();",
        container_id
    )
}

/// Doughnut of reservoir counts per fill tier.
pub fn render_distribution_chart(container_id: &str, chart: &DistributionChart) {
    render_when_ready("renderDistributionChart", container_id, chart);
}

/// Capacity against current volume, one bar pair per reservoir.
pub fn render_volume_chart(container_id: &str, chart: &VolumeChart) {
    render_when_ready("renderVolumeChart", container_id, chart);
}

/// Current volume against remaining capacity inside the detail modal.
pub fn render_modal_chart(container_id: &str, chart: &ModalChart) {
    render_when_ready("renderModalChart", container_id, chart);
}

/// Monthly min / mean / max lines plus per-year overlays.
pub fn render_trend_chart(container_id: &str, chart: &TrendChart) {
    render_when_ready("renderTrendChart", container_id, chart);
}

/// Destroy the Chart.js instance in the given container, if any, and
/// cancel a render still waiting for it.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_registers_pending_poll() {
        let js = render_script("renderModalChart", "modalChart", "{}");
        assert!(js.contains("if (polls['modalChart']) clearInterval(polls['modalChart']);"));
        assert!(js.contains("var poll = polls['modalChart'] = setInterval("));
        assert!(js.contains("window.renderModalChart('modalChart', payload);"));
    }

    #[test]
    fn test_destroy_cancels_pending_poll() {
        let js = destroy_script("trendChart");
        let cancel = js
            .find("clearInterval(polls['trendChart'])")
            .expect("destroy clears the pending render");
        let destroy = js.find("window.destroyChart('trendChart')").unwrap();
        assert!(cancel < destroy);
    }
}
