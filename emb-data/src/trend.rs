//! Monthly precipitation statistics for the reservoir with a historical series.
//!
//! Statistics cover the years picked by the year filter (all years when
//! unset) and the months picked by the month filter (all twelve when unset).

use crate::filter::{MonthRange, YearRange};
use emb_core::history::{ClimateRecord, HistoricalSeries};
use emb_utils::dates::month_name;
use serde::Serialize;

/// Min, mean and max of one month across the selected years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthStatistics {
    pub month: u32,
    pub label: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Raw values of one year, aligned with [`TrendSummary::months`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSeries {
    pub year: i32,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Distinct selected years, ascending.
    pub years: Vec<i32>,
    /// Selected months, ascending.
    pub months: Vec<u32>,
    pub statistics: Vec<MonthStatistics>,
    /// One series per selected year, or only the most recent one when more
    /// years are selected than the overlay limit.
    pub overlay: Vec<YearSeries>,
}

/// What the trend panel should show for a selected reservoir.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "summary", rename_all = "snake_case")]
pub enum TrendView {
    /// The reservoir has no historical series.
    NotApplicable,
    /// It has one, but the data is not loaded or nothing falls in the selection.
    Unavailable,
    Ready(TrendSummary),
}

fn series_for(record: &ClimateRecord, months: &[u32]) -> YearSeries {
    YearSeries {
        year: record.year,
        values: months
            .iter()
            .map(|&m| record.value_for(m).unwrap_or(0.0))
            .collect(),
    }
}

/// Compute the trend summary, or `None` when no historical year is selected.
pub fn summarize_trend(
    series: &HistoricalSeries,
    year_range: Option<YearRange>,
    month_range: Option<MonthRange>,
    max_overlay_years: usize,
) -> Option<TrendSummary> {
    let mut selected: Vec<&ClimateRecord> = series
        .years
        .iter()
        .filter(|r| year_range.map_or(true, |range| range.contains(r.year)))
        .collect();
    if selected.is_empty() {
        return None;
    }
    selected.sort_by_key(|r| r.year);

    let months: Vec<u32> = month_range.map_or_else(|| (1..=12).collect(), |r| r.months());

    let statistics = months
        .iter()
        .map(|&month| {
            let values: Vec<f64> = selected
                .iter()
                .map(|r| r.value_for(month).unwrap_or(0.0))
                .collect();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            MonthStatistics {
                month,
                label: month_name(month).unwrap_or_default().to_string(),
                min,
                mean,
                max,
            }
        })
        .collect();

    let mut years: Vec<i32> = selected.iter().map(|r| r.year).collect();
    years.dedup();

    let overlay = if years.len() <= max_overlay_years {
        selected.iter().map(|r| series_for(r, &months)).collect()
    } else {
        // `selected` is sorted by year, so the last row is the most recent.
        selected
            .last()
            .map(|r| vec![series_for(r, &months)])
            .unwrap_or_default()
    };

    Some(TrendSummary {
        years,
        months,
        statistics,
        overlay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, base: f64) -> ClimateRecord {
        let mut monthly_values = [0.0; 12];
        for (i, v) in monthly_values.iter_mut().enumerate() {
            *v = base + i as f64;
        }
        ClimateRecord {
            sequence_number: year as i64 - 2000,
            year,
            monthly_values,
        }
    }

    fn series(years: &[i32]) -> HistoricalSeries {
        HistoricalSeries::new(
            "Céspedes",
            years.iter().map(|&y| row(y, (y - 2000) as f64 * 10.0)).collect(),
        )
    }

    #[test]
    fn test_all_years_all_months_by_default() {
        let s = series(&[2021, 2019, 2020]);
        let summary = summarize_trend(&s, None, None, 5).unwrap();
        assert_eq!(summary.years, vec![2019, 2020, 2021]);
        assert_eq!(summary.months, (1..=12).collect::<Vec<_>>());
        assert_eq!(summary.statistics.len(), 12);

        let january = &summary.statistics[0];
        assert_eq!(january.label, "Enero");
        assert_eq!(january.min, 190.0);
        assert_eq!(january.max, 210.0);
        assert_eq!(january.mean, 200.0);

        assert_eq!(summary.overlay.len(), 3);
        assert_eq!(summary.overlay[0].year, 2019);
        assert_eq!(summary.overlay[0].values.len(), 12);
    }

    #[test]
    fn test_month_and_year_selection() {
        let s = series(&[2018, 2019, 2020, 2021]);
        let summary = summarize_trend(
            &s,
            Some(YearRange::new(2019, 2020)),
            MonthRange::new(3, 4),
            5,
        )
        .unwrap();
        assert_eq!(summary.years, vec![2019, 2020]);
        assert_eq!(summary.months, vec![3, 4]);
        let march = &summary.statistics[0];
        assert_eq!(march.label, "Marzo");
        assert_eq!(march.min, 192.0);
        assert_eq!(march.max, 202.0);
        assert_eq!(march.mean, 197.0);
        assert_eq!(summary.overlay[1].values, vec![202.0, 203.0]);
    }

    #[test]
    fn test_overlay_limit_keeps_most_recent_year() {
        let s = series(&[2015, 2016, 2017, 2018, 2019, 2020]);
        let summary = summarize_trend(&s, None, None, 5).unwrap();
        assert_eq!(summary.years.len(), 6);
        assert_eq!(summary.overlay.len(), 1);
        assert_eq!(summary.overlay[0].year, 2020);

        let summary = summarize_trend(&s, Some(YearRange::new(2016, 2020)), None, 5).unwrap();
        assert_eq!(summary.overlay.len(), 5);
    }

    #[test]
    fn test_no_selected_years() {
        let s = series(&[2019, 2020]);
        assert!(summarize_trend(&s, Some(YearRange::single(1990)), None, 5).is_none());
        assert!(summarize_trend(&series(&[]), None, None, 5).is_none());
    }
}
