use emb_core::reservoir::{ReservoirRecord, Tier};
use serde::Serialize;

/// Display-ready fields of one reservoir, shown in the detail panel and modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDetail {
    pub id: u32,
    pub title: String,
    pub municipality: String,
    /// `lat, lon` with four decimals.
    pub coordinates: String,
    pub capacity: String,
    pub current_volume: String,
    pub percentage: String,
    pub usage: String,
    pub last_updated: String,
    pub tier: Tier,
    pub has_historical_series: bool,
}

impl From<&ReservoirRecord> for RecordDetail {
    fn from(record: &ReservoirRecord) -> Self {
        RecordDetail {
            id: record.id,
            title: record.name.clone(),
            municipality: record.municipality.clone(),
            coordinates: format!(
                "{:.4}, {:.4}",
                record.coordinates.latitude, record.coordinates.longitude
            ),
            capacity: format!("{} hm³", record.capacity),
            current_volume: format!("{} hm³", record.current_volume),
            percentage: format!("{}%", record.fill_percentage),
            usage: record.usage.clone(),
            last_updated: record.last_updated.clone(),
            tier: record.tier,
            has_historical_series: record.has_historical_series,
        }
    }
}
