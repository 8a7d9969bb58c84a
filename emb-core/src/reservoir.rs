use emb_utils::numbers::round_half_up;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill percentage at or above which a reservoir is in the high tier.
pub const HIGH_THRESHOLD: i64 = 70;

/// Fill percentage at or above which a reservoir is in the medium tier.
pub const MEDIUM_THRESHOLD: i64 = 40;

/// Three-tier fill classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn from_percentage(percentage: i64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Tier::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// Chart colour used for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::High => "#27ae60",
            Tier::Medium => "#f39c12",
            Tier::Low => "#e74c3c",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position in decimal degrees. Missing values read as 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One reservoir row from the primary CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservoirRecord {
    /// 1-based line index in the source file; reassigned on every load.
    pub id: u32,
    pub name: String,
    pub municipality: String,
    /// Capacity in cubic hectometres (hm³). Always > 0 for loaded records.
    pub capacity: f64,
    /// Current stored volume in hm³. Not clamped at load time.
    pub current_volume: f64,
    /// Free-text use classification (supply, irrigation, ...).
    pub usage: String,
    pub coordinates: Coordinates,
    /// Raw last-updated text; may be empty.
    pub last_updated: String,
    /// `round(current_volume / capacity * 100)`
    pub fill_percentage: i64,
    pub tier: Tier,
    /// Whether the secondary historical dataset belongs to this reservoir.
    pub has_historical_series: bool,
}

impl ReservoirRecord {
    /// Build a record with its derived fields already computed.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        municipality: impl Into<String>,
        capacity: f64,
        current_volume: f64,
    ) -> Self {
        let mut record = ReservoirRecord {
            id,
            name: name.into(),
            municipality: municipality.into(),
            capacity,
            current_volume,
            usage: String::new(),
            coordinates: Coordinates::default(),
            last_updated: String::new(),
            fill_percentage: 0,
            tier: Tier::Low,
            has_historical_series: false,
        };
        record.refresh_derived();
        record
    }

    /// Hard validation applied at load: a name and a positive capacity.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.capacity > 0.0
    }

    /// Recompute `fill_percentage` and `tier` from the current volume.
    pub fn refresh_derived(&mut self) {
        self.fill_percentage = if self.capacity > 0.0 {
            round_half_up(self.current_volume / self.capacity * 100.0)
        } else {
            0
        };
        self.tier = Tier::from_percentage(self.fill_percentage);
    }

    /// Capacity not currently filled, floored at zero.
    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity - self.current_volume).max(0.0)
    }
}

/// Recompute derived fields for every record. Idempotent.
pub fn derive_fields(records: &mut [ReservoirRecord]) {
    for record in records.iter_mut() {
        record.refresh_derived();
    }
}

/// Flag the records whose name contains `key`, ignoring case.
///
/// An empty key flags nothing.
pub fn mark_historical(records: &mut [ReservoirRecord], key: &str) {
    let needle = key.trim().to_lowercase();
    for record in records.iter_mut() {
        record.has_historical_series =
            !needle.is_empty() && record.name.to_lowercase().contains(&needle);
    }
}
