//! Section header with an icon, title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Font Awesome icon class, e.g. `fas fa-chart-pie`
    #[props(default = String::new())]
    pub icon: String,
    /// Unit or scope explanation shown under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            class: "section-header",
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px; color: #2c3e50;",
                if !props.icon.is_empty() {
                    i { class: "{props.icon}", style: "margin-right: 6px;" }
                }
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
