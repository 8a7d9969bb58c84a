//! Historical precipitation trend of the selected reservoir.

use crate::components::{ChartContainer, ChartHeader};
use crate::state::AppState;
use dioxus::prelude::*;
use emb_data::trend::TrendView;

/// DOM id of the trend chart container.
pub const TREND_CHART_ID: &str = "trendChart";

#[component]
pub fn TrendPanel() -> Element {
    let state = use_context::<AppState>();
    let view = (state.selected_id)().and_then(|id| state.dashboard.read().trend(id));

    let placeholder = match &view {
        None => "Selecciona un embalse para ver su tendencia histórica".to_string(),
        Some(TrendView::NotApplicable) => {
            "No hay serie histórica de precipitaciones para este embalse".to_string()
        }
        Some(TrendView::Unavailable) => {
            "Datos históricos no disponibles para la selección actual".to_string()
        }
        Some(TrendView::Ready(_)) => String::new(),
    };
    let subtitle = match &view {
        Some(TrendView::Ready(summary)) => match (summary.years.first(), summary.years.last()) {
            (Some(first), Some(last)) if first != last => {
                format!("Precipitación mensual (mm), {} a {}", first, last)
            }
            (Some(year), _) => format!("Precipitación mensual (mm), {}", year),
            _ => String::new(),
        },
        _ => String::new(),
    };

    rsx! {
        div {
            class: "trend-placeholder",
            ChartHeader {
                title: "Gráficos de Tendencia".to_string(),
                icon: "fas fa-chart-line".to_string(),
                subtitle: subtitle,
            }
            ChartContainer {
                id: TREND_CHART_ID.to_string(),
                placeholder: placeholder,
                min_height: 320,
            }
        }
    }
}
