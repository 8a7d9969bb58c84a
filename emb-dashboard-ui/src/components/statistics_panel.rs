//! Summary cards for the working set.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    icon: String,
    label: String,
    value: String,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "stat-card",
            style: "flex: 1; min-width: 160px; padding: 16px; background: #fff; border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",
            i { class: "{props.icon}", style: "color: #3498db; font-size: 20px;" }
            div { style: "font-size: 24px; font-weight: bold; margin: 6px 0;", "{props.value}" }
            div { style: "font-size: 13px; color: #7f8c8d;", "{props.label}" }
        }
    }
}

/// Total capacity, total current volume and average fill of the filtered
/// subset (the full set before any filter is applied).
#[component]
pub fn StatisticsPanel() -> Element {
    let state = use_context::<AppState>();
    let (stats, count) = {
        let dashboard = state.dashboard.read();
        (dashboard.statistics(), dashboard.working_set().len())
    };

    rsx! {
        div {
            class: "statistics",
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0;",
            StatCard {
                icon: "fas fa-water".to_string(),
                label: "Capacidad Total (hm³)".to_string(),
                value: format!("{:.1}", stats.total_capacity),
            }
            StatCard {
                icon: "fas fa-tint".to_string(),
                label: "Volumen Actual (hm³)".to_string(),
                value: format!("{:.1}", stats.total_current),
            }
            StatCard {
                icon: "fas fa-percentage".to_string(),
                label: "Llenado Promedio".to_string(),
                value: format!("{}%", stats.average_percentage),
            }
            StatCard {
                icon: "fas fa-list".to_string(),
                label: "Embalses".to_string(),
                value: count.to_string(),
            }
        }
    }
}
