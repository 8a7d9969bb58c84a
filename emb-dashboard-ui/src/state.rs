//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use emb_core::config::DashboardConfig;
use emb_data::dashboard::Dashboard;
use emb_data::filter::{FilterOptions, MonthRange, YearRange};
use emb_data::status::StatusBoard;

/// Shared application state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded records, filtered subset and historical series
    pub dashboard: Signal<Dashboard>,
    /// Loading message and transient notices
    pub status: Signal<StatusBoard>,
    /// True until the first load attempt finishes
    pub loading: Signal<bool>,
    /// Free-text search over name and municipality
    pub search_text: Signal<String>,
    /// Year filter bounds; one bound alone selects a single year
    pub year_from: Signal<Option<i32>>,
    pub year_to: Signal<Option<i32>>,
    /// Month filter bounds (1-12); one bound alone selects a single month
    pub month_from: Signal<Option<u32>>,
    pub month_to: Signal<Option<u32>>,
    /// Reservoir shown in the detail and trend panels
    pub selected_id: Signal<Option<u32>>,
    /// Reservoir shown in the modal
    pub modal_id: Signal<Option<u32>>,
}

fn pair<T: Copy>(from: Option<T>, to: Option<T>) -> Option<(T, T)> {
    match (from, to) {
        (Some(a), Some(b)) => Some((a, b)),
        (Some(a), None) | (None, Some(a)) => Some((a, a)),
        (None, None) => None,
    }
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            dashboard: Signal::new(Dashboard::new(config)),
            status: Signal::new(StatusBoard::new()),
            loading: Signal::new(true),
            search_text: Signal::new(String::new()),
            year_from: Signal::new(None),
            year_to: Signal::new(None),
            month_from: Signal::new(None),
            month_to: Signal::new(None),
            selected_id: Signal::new(None),
            modal_id: Signal::new(None),
        }
    }

    /// Current filter inputs. Reading this subscribes the caller to them.
    pub fn filter_options(&self) -> FilterOptions {
        let year_range =
            pair((self.year_from)(), (self.year_to)()).map(|(a, b)| YearRange::new(a, b));
        let month_range =
            pair((self.month_from)(), (self.month_to)()).and_then(|(a, b)| MonthRange::new(a, b));
        FilterOptions {
            search_text: (self.search_text)(),
            year_range,
            month_range,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bound_selects_one_value() {
        assert_eq!(pair(Some(2020), Some(2023)), Some((2020, 2023)));
        assert_eq!(pair(Some(2021), None), Some((2021, 2021)));
        assert_eq!(pair(None, Some(7u32)), Some((7, 7)));
        assert_eq!(pair::<u32>(None, None), None);
    }
}
