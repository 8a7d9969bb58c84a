//! Reusable Dioxus RSX components for the reservoir dashboard.

mod action_bar;
mod chart_container;
mod chart_header;
mod date_filters;
mod detail_panel;
mod loading_spinner;
mod reservoir_modal;
mod reservoir_selector;
mod search_box;
mod statistics_panel;
mod status_message;
mod trend_panel;

pub use action_bar::ActionBar;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_filters::DateFilters;
pub use detail_panel::DetailPanel;
pub use loading_spinner::LoadingSpinner;
pub use reservoir_modal::{ReservoirModal, MODAL_CHART_ID};
pub use reservoir_selector::ReservoirSelector;
pub use search_box::SearchBox;
pub use statistics_panel::StatisticsPanel;
pub use status_message::StatusMessage;
pub use trend_panel::{TrendPanel, TREND_CHART_ID};
