//! Secondary dataset: monthly precipitation per year for one reservoir.
//!
//! Expected format (with headers): `No,Año,Ene,Feb,...,Dic`

use crate::loader::{CsvSource, LoadError};
use csv::ReaderBuilder;
use emb_utils::numbers::{parse_float_or_zero, parse_int_or_zero};
use serde::{Deserialize, Serialize};

/// Minimum columns per row: sequence number, year, twelve months.
pub const HISTORY_ROW_LENGTH: usize = 14;

/// Precipitation for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub sequence_number: i64,
    pub year: i32,
    /// January first. Unparseable cells read as 0.
    pub monthly_values: [f64; 12],
}

impl ClimateRecord {
    /// Value for a 1-based month.
    pub fn value_for(&self, month: u32) -> Option<f64> {
        self.monthly_values
            .get(month.checked_sub(1)? as usize)
            .copied()
    }
}

/// The historical dataset together with the reservoir key it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// Case-insensitive substring of the owning reservoir's name.
    pub key: String,
    /// Rows in file order.
    pub years: Vec<ClimateRecord>,
}

impl HistoricalSeries {
    pub fn new(key: impl Into<String>, years: Vec<ClimateRecord>) -> Self {
        Self {
            key: key.into(),
            years,
        }
    }

    /// Distinct years present, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Parse the historical CSV. Short rows and rows with a year ≤ 0 are dropped.
pub fn parse_history_csv(text: &str) -> Vec<ClimateRecord> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if row.len() < HISTORY_ROW_LENGTH {
            skipped += 1;
            continue;
        }
        let year = parse_int_or_zero(row.get(1).unwrap_or(""));
        if year <= 0 || year > i32::MAX as i64 {
            skipped += 1;
            continue;
        }
        let mut monthly_values = [0.0; 12];
        for (month, value) in monthly_values.iter_mut().enumerate() {
            *value = parse_float_or_zero(row.get(month + 2).unwrap_or(""));
        }
        records.push(ClimateRecord {
            sequence_number: parse_int_or_zero(row.get(0).unwrap_or("")),
            year: year as i32,
            monthly_values,
        });
    }
    log::info!(
        "history: loaded {} years, skipped {} rows",
        records.len(),
        skipped
    );
    records
}

/// Fetch and parse the historical dataset for the reservoir matching `key`.
pub async fn load_history<S: CsvSource>(
    source: &S,
    resource: &str,
    key: &str,
) -> Result<HistoricalSeries, LoadError> {
    let text = source.fetch_text(resource).await?;
    Ok(HistoricalSeries::new(key, parse_history_csv(&text)))
}
