//! `summary`: statistics and reservoir list of the filtered subset.

use crate::args::{FilterArgs, SourceArgs};
use crate::session::open_dashboard;
use emb_data::charts::{tier_label, DistributionChart, TIERS};
use emb_data::dashboard::Dashboard;
use std::fmt::Write;

pub async fn run_summary(source: &SourceArgs, filters: &FilterArgs) -> anyhow::Result<()> {
    let mut dashboard = open_dashboard(source).await?;
    let options = filters.to_options();
    if !options.is_empty() {
        dashboard.apply_filters(options);
    }
    print!("{}", format_summary(&dashboard)?);
    Ok(())
}

/// Statistics block, tier counts, then one line per reservoir of the working set.
pub fn format_summary(dashboard: &Dashboard) -> anyhow::Result<String> {
    let records = dashboard.working_set();
    let stats = dashboard.statistics();
    let mut out = String::new();

    writeln!(out, "Embalses: {} de {}", records.len(), dashboard.records().len())?;
    writeln!(out, "Capacidad total: {:.1} hm³", stats.total_capacity)?;
    writeln!(out, "Volumen actual: {:.1} hm³", stats.total_current)?;
    writeln!(out, "Llenado promedio: {}%", stats.average_percentage)?;

    let distribution = DistributionChart::from_records(records);
    for (tier, count) in TIERS.iter().zip(&distribution.counts) {
        writeln!(out, "  {}: {}", tier_label(*tier), count)?;
    }

    if !records.is_empty() {
        writeln!(out)?;
    }
    for r in records {
        writeln!(
            out,
            "{:>3}  {:<28} {:<28} {:>8.1} / {:>8.1} hm³ {:>4}%  {}",
            r.id, r.name, r.municipality, r.current_volume, r.capacity, r.fill_percentage, r.last_updated
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emb_core::config::DashboardConfig;
    use emb_core::reservoir::ReservoirRecord;
    use emb_data::filter::FilterOptions;

    fn dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new(DashboardConfig::default());
        let ticket = dashboard.begin_load();
        dashboard
            .finish_load(
                ticket,
                Ok(vec![
                    ReservoirRecord::new(1, "Uno", "Mella", 10.0, 7.0),
                    ReservoirRecord::new(2, "Dos", "Guamá", 20.0, 8.0),
                ]),
            )
            .unwrap();
        dashboard
    }

    #[test]
    fn test_format_summary() {
        let text = format_summary(&dashboard()).unwrap();
        assert!(text.contains("Embalses: 2 de 2"));
        assert!(text.contains("Capacidad total: 30.0 hm³"));
        assert!(text.contains("Volumen actual: 15.0 hm³"));
        assert!(text.contains("Llenado promedio: 55%"));
        assert!(text.contains("Alto (≥70%): 1"));
        assert!(text.contains("Medio (40-69%): 1"));
    }

    #[test]
    fn test_empty_filter_result() {
        let mut dashboard = dashboard();
        dashboard.apply_filters(FilterOptions {
            search_text: "nada".to_string(),
            ..Default::default()
        });
        let text = format_summary(&dashboard).unwrap();
        assert!(text.contains("Embalses: 0 de 2"));
        assert!(text.contains("Llenado promedio: 0%"));
    }
}
