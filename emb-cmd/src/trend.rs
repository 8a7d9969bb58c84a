//! `trend`: monthly precipitation statistics of one reservoir.

use crate::args::{FilterArgs, SourceArgs};
use crate::session::open_dashboard;
use emb_core::reservoir::ReservoirRecord;
use emb_data::dashboard::Dashboard;
use emb_data::trend::TrendView;
use std::fmt::Write;

pub async fn run_trend(source: &SourceArgs, filters: &FilterArgs, reservoir: &str) -> anyhow::Result<()> {
    let mut dashboard = open_dashboard(source).await?;
    dashboard.apply_filters(filters.to_options());
    let record = find_reservoir(&dashboard, reservoir)
        .ok_or_else(|| anyhow::anyhow!("No reservoir matches '{}'", reservoir))?
        .clone();
    let view = dashboard
        .trend(record.id)
        .ok_or_else(|| anyhow::anyhow!("Reservoir {} disappeared", record.id))?;
    print!("{}", format_trend(&record.name, &view)?);
    Ok(())
}

/// Look a reservoir up by id, then by case-insensitive name fragment.
pub fn find_reservoir<'a>(dashboard: &'a Dashboard, query: &str) -> Option<&'a ReservoirRecord> {
    if let Ok(id) = query.trim().parse::<u32>() {
        return dashboard.find(id);
    }
    let needle = query.trim().to_lowercase();
    dashboard
        .records()
        .iter()
        .find(|r| r.name.to_lowercase().contains(&needle))
}

pub fn format_trend(name: &str, view: &TrendView) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", name)?;
    match view {
        TrendView::NotApplicable => {
            writeln!(out, "Sin serie histórica de precipitaciones.")?;
        }
        TrendView::Unavailable => {
            writeln!(out, "Datos históricos no disponibles para la selección.")?;
        }
        TrendView::Ready(summary) => {
            let years: Vec<String> = summary.years.iter().map(|y| y.to_string()).collect();
            writeln!(out, "Años: {}", years.join(", "))?;
            writeln!(out, "{:<12} {:>8} {:>8} {:>8}", "Mes", "Mín", "Media", "Máx")?;
            for s in &summary.statistics {
                writeln!(out, "{:<12} {:>8.1} {:>8.1} {:>8.1}", s.label, s.min, s.mean, s.max)?;
            }
            for series in &summary.overlay {
                let values: Vec<String> = series.values.iter().map(|v| format!("{:.1}", v)).collect();
                writeln!(out, "{}: {}", series.year, values.join(" "))?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::sample_args;
    use emb_data::filter::{FilterOptions, MonthRange, YearRange};

    #[tokio::test]
    async fn test_trend_for_sample_reservoir() {
        let mut dashboard = open_dashboard(&sample_args()).await.unwrap();
        dashboard.apply_filters(FilterOptions {
            year_range: Some(YearRange::new(2022, 2023)),
            month_range: MonthRange::new(1, 2),
            ..Default::default()
        });
        let record = find_reservoir(&dashboard, "céspedes").unwrap().clone();
        let view = dashboard.trend(record.id).unwrap();
        let text = format_trend(&record.name, &view).unwrap();
        assert!(text.contains("Años: 2022, 2023"));
        // January: 28.3 and 22.9
        assert!(text.contains("Enero"));
        assert!(text.contains("22.9"));
        assert!(text.contains("25.6"));
        assert!(text.contains("28.3"));
        assert!(!text.contains("Marzo"));
    }

    #[tokio::test]
    async fn test_trend_not_applicable() {
        let dashboard = open_dashboard(&sample_args()).await.unwrap();
        let record = find_reservoir(&dashboard, "Gota Blanca").unwrap();
        let view = dashboard.trend(record.id).unwrap();
        assert_eq!(view, TrendView::NotApplicable);
        assert!(format_trend(&record.name, &view).unwrap().contains("Sin serie histórica"));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let dashboard = open_dashboard(&sample_args()).await.unwrap();
        assert_eq!(find_reservoir(&dashboard, "2").map(|r| r.name.as_str()), Some("Gota Blanca"));
        assert!(find_reservoir(&dashboard, "99").is_none());
        assert!(find_reservoir(&dashboard, "inexistente").is_none());
    }
}
