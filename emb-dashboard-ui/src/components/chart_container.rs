//! Chart container component with a placeholder state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Chart.js renders into
    pub id: String,
    /// Text shown over the chart area, e.g. when there is nothing to plot.
    /// Empty shows the chart.
    #[props(default = String::new())]
    pub placeholder: String,
    /// Minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A sized div for Chart.js canvases. The chart div stays mounted while the
/// placeholder is shown so pending renders still find their container.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            if !props.placeholder.is_empty() {
                div {
                    class: "chart-placeholder",
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #7f8c8d; text-align: center; padding: 16px;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
