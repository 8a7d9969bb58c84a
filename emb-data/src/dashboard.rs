//! In-memory dashboard state.
//!
//! [`Dashboard`] owns the full record set, the filtered subset and the
//! historical series. Every view (statistics, detail, trend, export) is
//! derived from it on demand.
//!
//! Reloads are sequenced with [`LoadTicket`]s: `begin_load` hands out a new
//! ticket and `finish_load` ignores results carrying an older one, so when
//! two refreshes overlap the last one requested wins regardless of which
//! response arrives first.

use crate::aggregate::{summarize, Statistics};
use crate::detail::RecordDetail;
use crate::filter::FilterOptions;
use crate::simulate;
use crate::trend::{summarize_trend, TrendView};
use emb_core::config::DashboardConfig;
use emb_core::export::{export_csv, ExportMode};
use emb_core::history::{load_history, HistoricalSeries};
use emb_core::loader::{load_reservoirs, CsvSource, LoadError};
use emb_core::reservoir::{mark_historical, ReservoirRecord};
use emb_utils::dates::record_year;
use rand::Rng;
use serde::Serialize;

/// Identifies one requested load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Entry of the reservoir selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOption {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: DashboardConfig,
    records: Vec<ReservoirRecord>,
    filters: FilterOptions,
    /// `None` until filters are first applied.
    filtered: Option<Vec<ReservoirRecord>>,
    history: Option<HistoricalSeries>,
    generation: u64,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Dashboard {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The full record set in load order.
    pub fn records(&self) -> &[ReservoirRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// The filtered subset; `None` while no filter has been applied yet.
    /// An empty slice means filters matched nothing.
    pub fn filtered(&self) -> Option<&[ReservoirRecord]> {
        self.filtered.as_deref()
    }

    /// The subset views work on: filtered if filters were applied, else everything.
    pub fn working_set(&self) -> &[ReservoirRecord] {
        self.filtered().unwrap_or(&self.records)
    }

    pub fn history(&self) -> Option<&HistoricalSeries> {
        self.history.as_ref()
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Complete the load started with `ticket`.
    ///
    /// Returns `Ok(false)` when the ticket is stale and the result was
    /// discarded. On error the previously loaded records stay in place.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ReservoirRecord>, LoadError>,
    ) -> Result<bool, LoadError> {
        if !self.is_current(ticket) {
            log::debug!("dashboard: discarding result of superseded load {}", ticket.0);
            return Ok(false);
        }
        let mut records = result?;
        mark_historical(&mut records, &self.config.historical_key);
        self.records = records;
        self.reapply_filters();
        log::info!("dashboard: {} reservoirs loaded", self.records.len());
        Ok(true)
    }

    pub fn set_history(&mut self, history: HistoricalSeries) {
        self.history = Some(history);
    }

    /// Complete the historical half of the load started with `ticket`.
    ///
    /// Same rules as [`Self::finish_load`]: a stale ticket is ignored and a
    /// failure keeps the previously loaded series.
    pub fn finish_history_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<HistoricalSeries, LoadError>,
    ) -> Result<bool, LoadError> {
        if !self.is_current(ticket) {
            log::debug!("dashboard: discarding history of superseded load {}", ticket.0);
            return Ok(false);
        }
        let history = result?;
        log::info!("dashboard: {} historical years loaded", history.years.len());
        self.history = Some(history);
        Ok(true)
    }

    /// Replace the active filters and recompute the filtered subset.
    pub fn apply_filters(&mut self, filters: FilterOptions) {
        self.filters = filters;
        self.filtered = Some(self.filters.apply(&self.records));
    }

    fn reapply_filters(&mut self) {
        if self.filtered.is_some() {
            self.filtered = Some(self.filters.apply(&self.records));
        }
    }

    /// Statistics of the working set.
    pub fn statistics(&self) -> Statistics {
        summarize(self.working_set())
    }

    pub fn find(&self, id: u32) -> Option<&ReservoirRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn detail(&self, id: u32) -> Option<RecordDetail> {
        self.find(id).map(RecordDetail::from)
    }

    /// Trend view for the reservoir `id`, using the active year and month
    /// filters as the historical selection. `None` for an unknown id.
    pub fn trend(&self, id: u32) -> Option<TrendView> {
        let record = self.find(id)?;
        if !record.has_historical_series {
            return Some(TrendView::NotApplicable);
        }
        let Some(history) = &self.history else {
            return Some(TrendView::Unavailable);
        };
        let summary = summarize_trend(
            history,
            self.filters.year_range,
            self.filters.month_range,
            self.config.max_overlay_years,
        );
        Some(summary.map_or(TrendView::Unavailable, TrendView::Ready))
    }

    /// Run one simulated update over the full set.
    pub fn simulate_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        simulate::simulate_tick(&mut self.records, rng);
        self.reapply_filters();
    }

    /// Export the full record set, ignoring filters.
    pub fn export(&self, mode: ExportMode) -> anyhow::Result<String> {
        export_csv(&self.records, mode)
    }

    /// Reservoirs sorted by name for the selector. Load order is untouched.
    pub fn selector_options(&self) -> Vec<SelectorOption> {
        let mut options: Vec<SelectorOption> = self
            .records
            .iter()
            .map(|r| SelectorOption {
                id: r.id,
                name: r.name.clone(),
            })
            .collect();
        options.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        options
    }

    /// Years offered by the year filter, most recent first: every year with
    /// a dated record plus every year of the historical series.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .records
            .iter()
            .filter_map(|r| record_year(&r.last_updated))
            .collect();
        if let Some(history) = &self.history {
            years.extend(history.available_years());
        }
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    /// Rebuild both datasets from `source`. Returns the record count.
    ///
    /// The primary dataset is required. A failed historical load is logged
    /// and the previous series stays in place.
    pub async fn refresh<S: CsvSource>(&mut self, source: &S) -> Result<usize, LoadError> {
        let ticket = self.begin_load();
        let resource = self.config.reservoirs_csv.clone();
        let result = load_reservoirs(source, &resource).await;
        self.finish_load(ticket, result)?;

        let result = load_history(
            source,
            &self.config.history_csv,
            &self.config.historical_key,
        )
        .await;
        if let Err(e) = self.finish_history_load(ticket, result) {
            log::warn!("dashboard: historical series not refreshed: {}", e);
        }
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{MonthRange, YearRange};
    use emb_core::history::ClimateRecord;
    use emb_core::loader::parse_reservoir_csv;
    use emb_core::reservoir::Tier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    const CSV: &str = "Nombre,Municipio,Capacidad,VolumenActual,Uso,Latitud,Longitud,Fecha\n\
Gota Blanca,Santiago de Cuba,10,7,Abasto,20.1,-75.8,2024-03-10\n\
Carlos Manuel de Céspedes,Contramaestre,20,8,Riego,20.2,-76.2,2023-07-01\n\
Sin Capacidad,Songo-La Maya,0,5,Riego,20.3,-75.7,2024-01-01\n\
Chalons,Santiago de Cuba,4,1,Abasto,20.0,-75.8,\n";

    const HISTORY: &str = "No,Año,Ene,Feb,Mar,Abr,May,Jun,Jul,Ago,Sep,Oct,Nov,Dic\n\
1,2020,10,20,30,40,50,60,70,80,90,100,110,120\n\
2,2021,20,30,40,50,60,70,80,90,100,110,120,130\n";

    struct MapSource(HashMap<String, String>);

    impl CsvSource for MapSource {
        async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
            self.0.get(resource).cloned().ok_or_else(|| LoadError::Status {
                resource: resource.to_string(),
                status: 404,
            })
        }
    }

    fn source() -> MapSource {
        let config = DashboardConfig::default();
        let mut files = HashMap::new();
        files.insert(config.reservoirs_csv, CSV.to_string());
        files.insert(config.history_csv, HISTORY.to_string());
        MapSource(files)
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let ticket = dashboard.begin_load();
        assert!(dashboard.finish_load(ticket, Ok(parse_reservoir_csv(CSV))).unwrap());
        dashboard
    }

    fn not_found() -> LoadError {
        LoadError::Status {
            resource: "x".to_string(),
            status: 500,
        }
    }

    #[test]
    fn test_end_to_end_statistics() {
        let dashboard = loaded();
        assert_eq!(dashboard.records().len(), 3);
        assert!(dashboard.filtered().is_none());
        let stats = dashboard.statistics();
        assert_eq!(stats.total_capacity, 34.0);
        assert_eq!(stats.total_current, 16.0);
        // 70, 40, 25
        assert_eq!(stats.average_percentage, 45);
    }

    #[test]
    fn test_filtered_empty_differs_from_unfiltered() {
        let mut dashboard = loaded();
        dashboard.apply_filters(FilterOptions {
            search_text: "no existe".to_string(),
            ..Default::default()
        });
        assert_eq!(dashboard.filtered(), Some(&[][..]));
        assert_eq!(dashboard.statistics(), Statistics::default());
    }

    #[test]
    fn test_filters_drive_statistics() {
        let mut dashboard = loaded();
        dashboard.apply_filters(FilterOptions {
            search_text: "santiago".to_string(),
            ..Default::default()
        });
        let stats = dashboard.statistics();
        assert_eq!(stats.total_capacity, 14.0);
        assert_eq!(stats.average_percentage, 48);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut dashboard = loaded();
        let first = dashboard.begin_load();
        let second = dashboard.begin_load();
        let newer = vec![ReservoirRecord::new(1, "Nuevo", "M", 5.0, 5.0)];
        assert!(dashboard.finish_load(second, Ok(newer)).unwrap());
        let older = parse_reservoir_csv(CSV);
        assert!(!dashboard.finish_load(first, Ok(older)).unwrap());
        assert_eq!(dashboard.records().len(), 1);
        assert_eq!(dashboard.records()[0].name, "Nuevo");

        // A stale failure is ignored too.
        assert!(!dashboard.finish_load(first, Err(not_found())).unwrap());
    }

    #[test]
    fn test_failed_load_keeps_previous_records() {
        let mut dashboard = loaded();
        let ticket = dashboard.begin_load();
        assert!(dashboard.finish_load(ticket, Err(not_found())).is_err());
        assert_eq!(dashboard.records().len(), 3);
    }

    #[test]
    fn test_reload_reapplies_filters() {
        let mut dashboard = loaded();
        dashboard.apply_filters(FilterOptions {
            year_range: Some(YearRange::single(2024)),
            ..Default::default()
        });
        assert_eq!(dashboard.filtered().map(|f| f.len()), Some(1));
        let ticket = dashboard.begin_load();
        dashboard.finish_load(ticket, Ok(parse_reservoir_csv(CSV))).unwrap();
        assert_eq!(dashboard.filtered().map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_detail_and_unknown_id() {
        let dashboard = loaded();
        let detail = dashboard.detail(1).unwrap();
        assert_eq!(detail.title, "Gota Blanca");
        assert_eq!(detail.percentage, "70%");
        assert_eq!(detail.tier, Tier::High);
        assert!(dashboard.detail(99).is_none());
        assert!(dashboard.trend(99).is_none());
    }

    #[test]
    fn test_trend_views() {
        let mut dashboard = loaded();
        assert_eq!(dashboard.trend(1), Some(TrendView::NotApplicable));
        assert_eq!(dashboard.trend(2), Some(TrendView::Unavailable));

        dashboard.set_history(HistoricalSeries::new(
            "Céspedes",
            emb_core::history::parse_history_csv(HISTORY),
        ));
        let Some(TrendView::Ready(summary)) = dashboard.trend(2) else {
            panic!("expected a ready trend");
        };
        assert_eq!(summary.years, vec![2020, 2021]);
        assert_eq!(summary.statistics[0].mean, 15.0);

        dashboard.apply_filters(FilterOptions {
            year_range: Some(YearRange::single(2021)),
            month_range: MonthRange::new(6, 7),
            ..Default::default()
        });
        let Some(TrendView::Ready(summary)) = dashboard.trend(2) else {
            panic!("expected a ready trend");
        };
        assert_eq!(summary.months, vec![6, 7]);
        assert_eq!(summary.statistics[1].max, 80.0);

        dashboard.apply_filters(FilterOptions {
            year_range: Some(YearRange::single(1990)),
            ..Default::default()
        });
        assert_eq!(dashboard.trend(2), Some(TrendView::Unavailable));
    }

    #[test]
    fn test_simulate_keeps_filtered_subset_in_sync() {
        let mut dashboard = loaded();
        dashboard.apply_filters(FilterOptions::default());
        let mut rng = StdRng::seed_from_u64(11);
        dashboard.simulate_tick(&mut rng);
        assert_eq!(dashboard.filtered().unwrap(), dashboard.records());
    }

    #[test]
    fn test_export_ignores_filters() {
        let mut dashboard = loaded();
        dashboard.apply_filters(FilterOptions {
            search_text: "chalons".to_string(),
            ..Default::default()
        });
        let text = dashboard.export(ExportMode::Compatible).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_selector_sorted_without_reordering_records() {
        let dashboard = loaded();
        let names: Vec<String> = dashboard
            .selector_options()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["Carlos Manuel de Céspedes", "Chalons", "Gota Blanca"]);
        assert_eq!(dashboard.records()[0].name, "Gota Blanca");
    }

    #[test]
    fn test_available_years_descending() {
        let mut dashboard = loaded();
        assert_eq!(dashboard.available_years(), vec![2024, 2023]);
        dashboard.set_history(HistoricalSeries::new(
            "Céspedes",
            vec![ClimateRecord {
                sequence_number: 1,
                year: 2019,
                monthly_values: [0.0; 12],
            }],
        ));
        assert_eq!(dashboard.available_years(), vec![2024, 2023, 2019]);
    }

    #[test]
    fn test_stale_history_is_discarded() {
        let mut dashboard = loaded();
        let first = dashboard.begin_load();
        let second = dashboard.begin_load();
        let newer = HistoricalSeries::new("Céspedes", emb_core::history::parse_history_csv(HISTORY));
        assert!(dashboard.finish_history_load(second, Ok(newer)).unwrap());
        let older = HistoricalSeries::new("Céspedes", Vec::new());
        assert!(!dashboard.finish_history_load(first, Ok(older)).unwrap());
        assert_eq!(dashboard.history().unwrap().years.len(), 2);

        let third = dashboard.begin_load();
        assert!(dashboard.finish_history_load(third, Err(not_found())).is_err());
        assert_eq!(dashboard.history().unwrap().years.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_from_source() {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let count = dashboard.refresh(&source()).await.unwrap();
        assert_eq!(count, 3);
        assert!(dashboard.find(2).unwrap().has_historical_series);
        assert!(matches!(dashboard.trend(2), Some(TrendView::Ready(_))));

        let empty = MapSource(HashMap::new());
        assert!(dashboard.refresh(&empty).await.is_err());
        assert_eq!(dashboard.records().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_rebuilds_history() {
        let mut source = source();
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        dashboard.refresh(&source).await.unwrap();
        let january_mean = |dashboard: &Dashboard| match dashboard.trend(2) {
            Some(TrendView::Ready(summary)) => summary.statistics[0].mean,
            other => panic!("expected a ready trend, got {:?}", other),
        };
        assert_eq!(january_mean(&dashboard), 15.0);

        let history_csv = DashboardConfig::default().history_csv;
        source.0.insert(
            history_csv.clone(),
            HISTORY.replace("2020,10,", "2020,99,").replace("2021,20,", "2021,99,"),
        );
        dashboard.refresh(&source).await.unwrap();
        assert_eq!(january_mean(&dashboard), 99.0);

        // A missing history file keeps the previous series.
        source.0.remove(&history_csv);
        dashboard.refresh(&source).await.unwrap();
        assert_eq!(january_mean(&dashboard), 99.0);
    }
}
