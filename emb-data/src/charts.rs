//! Chart payloads handed to the Chart.js bridge as JSON.
//!
//! Each payload carries plain arrays only; rendering options live in the
//! JavaScript side.

use crate::trend::TrendSummary;
use emb_core::reservoir::{ReservoirRecord, Tier};
use serde::Serialize;

/// Colour of the unfilled slice in the modal doughnut.
pub const REMAINING_COLOR: &str = "#ecf0f1";

pub const TIERS: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

/// Legend text of a tier.
pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::High => "Alto (≥70%)",
        Tier::Medium => "Medio (40-69%)",
        Tier::Low => "Bajo (<40%)",
    }
}

/// Doughnut of how many reservoirs fall in each tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionChart {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub colors: Vec<String>,
}

impl DistributionChart {
    pub fn from_records(records: &[ReservoirRecord]) -> Self {
        let counts = TIERS
            .iter()
            .map(|tier| records.iter().filter(|r| r.tier == *tier).count())
            .collect();
        DistributionChart {
            labels: TIERS.iter().map(|t| tier_label(*t).to_string()).collect(),
            counts,
            colors: TIERS.iter().map(|t| t.color().to_string()).collect(),
        }
    }
}

/// Bar chart of capacity against current volume per reservoir.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeChart {
    pub labels: Vec<String>,
    pub capacity: Vec<f64>,
    pub current: Vec<f64>,
    /// Tier colour of each reservoir's current-volume bar.
    pub colors: Vec<String>,
}

impl VolumeChart {
    pub fn from_records(records: &[ReservoirRecord]) -> Self {
        VolumeChart {
            labels: records.iter().map(|r| r.name.clone()).collect(),
            capacity: records.iter().map(|r| r.capacity).collect(),
            current: records.iter().map(|r| r.current_volume).collect(),
            colors: records.iter().map(|r| r.tier.color().to_string()).collect(),
        }
    }
}

/// Current volume against remaining capacity for one reservoir.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalChart {
    pub labels: [&'static str; 2],
    pub values: [f64; 2],
    pub colors: [&'static str; 2],
}

impl From<&ReservoirRecord> for ModalChart {
    fn from(record: &ReservoirRecord) -> Self {
        ModalChart {
            labels: ["Volumen Actual", "Capacidad Restante"],
            values: [record.current_volume, record.remaining_capacity()],
            colors: [record.tier.color(), REMAINING_COLOR],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendDataset {
    pub label: String,
    pub values: Vec<f64>,
}

/// Line chart of monthly min / mean / max plus the per-year overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub min: Vec<f64>,
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub overlay: Vec<TrendDataset>,
}

impl TrendChart {
    pub fn new(reservoir_name: &str, summary: &TrendSummary) -> Self {
        let stats = &summary.statistics;
        TrendChart {
            title: format!("Precipitaciones mensuales - {}", reservoir_name),
            labels: stats.iter().map(|s| s.label.clone()).collect(),
            min: stats.iter().map(|s| s.min).collect(),
            mean: stats.iter().map(|s| s.mean).collect(),
            max: stats.iter().map(|s| s.max).collect(),
            overlay: summary
                .overlay
                .iter()
                .map(|y| TrendDataset {
                    label: y.year.to_string(),
                    values: y.values.clone(),
                })
                .collect(),
        }
    }
}
