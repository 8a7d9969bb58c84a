//! Dashboard of the reservoirs of Santiago de Cuba.
//!
//! Data flow:
//! 1. On mount the app fetches `BD/embalses_santiago_cuba.csv` (relative to
//!    the page) and then the historical precipitation CSV.
//! 2. Search, year and month inputs re-filter the record set; statistics and
//!    the tier/volume charts follow the filtered subset.
//! 3. Selecting a reservoir shows its details and, for the reservoir with a
//!    historical series, the monthly precipitation trend.
//! 4. The footer buttons reload the data, export the full set as CSV, or run
//!    one simulated volume update.

use dioxus::prelude::*;
use emb_dashboard_ui::actions;
use emb_dashboard_ui::components::{
    ActionBar, ChartContainer, ChartHeader, DateFilters, DetailPanel, LoadingSpinner,
    ReservoirModal, ReservoirSelector, SearchBox, StatisticsPanel, StatusMessage, TrendPanel,
    MODAL_CHART_ID, TREND_CHART_ID,
};
use emb_dashboard_ui::js_bridge;
use emb_dashboard_ui::state::AppState;
use emb_data::charts::{DistributionChart, ModalChart, TrendChart, VolumeChart};
use emb_data::trend::TrendView;

/// Chart container DOM element IDs used by Chart.js to render into.
const DISTRIBUTION_CHART_ID: &str = "distributionChart";
const VOLUME_CHART_ID: &str = "volumeChart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("embalses-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load data on mount
    use_effect(move || {
        js_bridge::init_charts();
        spawn(actions::initial_load(state));
    });

    // Re-filter whenever a filter input changes
    use_effect(move || {
        let options = state.filter_options();
        if options.is_empty() && state.dashboard.peek().filtered().is_none() {
            return;
        }
        state.dashboard.write().apply_filters(options);
    });

    // Tier distribution and per-reservoir volumes follow the working set
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let dashboard = state.dashboard.read();
        let records = dashboard.working_set();
        if records.is_empty() {
            js_bridge::destroy_chart(DISTRIBUTION_CHART_ID);
            js_bridge::destroy_chart(VOLUME_CHART_ID);
            return;
        }
        js_bridge::render_distribution_chart(
            DISTRIBUTION_CHART_ID,
            &DistributionChart::from_records(records),
        );
        js_bridge::render_volume_chart(VOLUME_CHART_ID, &VolumeChart::from_records(records));
    });

    // Trend chart of the selected reservoir
    use_effect(move || {
        let Some(id) = (state.selected_id)() else {
            js_bridge::destroy_chart(TREND_CHART_ID);
            return;
        };
        let dashboard = state.dashboard.read();
        match (dashboard.trend(id), dashboard.find(id)) {
            (Some(TrendView::Ready(summary)), Some(record)) => {
                log::info!("Rendering trend for {}", record.name);
                js_bridge::render_trend_chart(TREND_CHART_ID, &TrendChart::new(&record.name, &summary));
            }
            _ => js_bridge::destroy_chart(TREND_CHART_ID),
        }
    });

    // Modal doughnut
    use_effect(move || {
        let Some(id) = (state.modal_id)() else {
            return;
        };
        if let Some(record) = state.dashboard.read().find(id) {
            js_bridge::render_modal_chart(MODAL_CHART_ID, &ModalChart::from(record));
        }
    });

    let record_count = state.dashboard.read().records().len();

    rsx! {
        div {
            class: "container",
            style: "max-width: 1200px; margin: 0 auto; padding: 20px; font-family: 'Segoe UI', Roboto, sans-serif;",

            header {
                style: "text-align: center; margin-bottom: 16px;",
                h1 {
                    style: "color: #2c3e50; margin-bottom: 4px;",
                    i { class: "fas fa-water", style: "margin-right: 8px;" }
                    "Embalses de Santiago de Cuba"
                }
                p {
                    style: "color: #666;",
                    "Estado actual de los embalses de la provincia"
                }
            }

            StatusMessage {}

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    class: "filters",
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
                    SearchBox {}
                    DateFilters {}
                }

                StatisticsPanel {}

                div {
                    class: "charts",
                    style: "display: grid; grid-template-columns: 1fr 2fr; gap: 16px; margin: 16px 0;",
                    div {
                        ChartHeader {
                            title: "Distribución por nivel de llenado".to_string(),
                            icon: "fas fa-chart-pie".to_string(),
                        }
                        ChartContainer { id: DISTRIBUTION_CHART_ID.to_string(), min_height: 300 }
                    }
                    div {
                        ChartHeader {
                            title: "Volumen por embalse".to_string(),
                            icon: "fas fa-chart-bar".to_string(),
                            subtitle: "Capacidad y volumen actual en hm³".to_string(),
                        }
                        ChartContainer { id: VOLUME_CHART_ID.to_string(), min_height: 300 }
                    }
                }

                div {
                    class: "selection",
                    style: "display: grid; grid-template-columns: 1fr 2fr; gap: 16px;",
                    div {
                        ReservoirSelector {}
                        DetailPanel {}
                    }
                    TrendPanel {}
                }

                ActionBar {}

                p {
                    style: "text-align: center; color: #95a5a6; font-size: 12px;",
                    "{record_count} embalses cargados"
                }
            }

            ReservoirModal {}
        }
    }
}
