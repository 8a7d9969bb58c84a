//! Primary reservoir CSV ingestion.
//!
//! Expected columns, in order:
//! `name, municipality, capacity, current volume, use, latitude, longitude, last updated`
//!
//! The header line is only used for its field count. Malformed rows are
//! dropped without an error; only a failed fetch is reported.

use crate::csv_line::parse_line;
use crate::reservoir::{derive_fields, Coordinates, ReservoirRecord, Tier};
use emb_utils::numbers::parse_float_or_zero;
use thiserror::Error;

/// A resource could not be fetched or decoded as a whole.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The server answered with a non-OK status.
    #[error("HTTP error {status} fetching {resource}")]
    Status { resource: String, status: u16 },

    /// The request never produced a response.
    #[error("request for {resource} failed: {message}")]
    Transport { resource: String, message: String },

    /// Reading a local resource failed.
    #[error("failed to read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The body was not valid UTF-8 or not a valid gzip stream.
    #[error("failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

/// Something that can fetch the text of a named CSV resource.
///
/// Implementations bypass caches so repeated loads see server-side updates.
#[allow(async_fn_in_trait)]
pub trait CsvSource {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError>;
}

/// Fetch `resource` from `source` and parse it into reservoir records.
pub async fn load_reservoirs<S: CsvSource>(
    source: &S,
    resource: &str,
) -> Result<Vec<ReservoirRecord>, LoadError> {
    let text = source.fetch_text(resource).await?;
    let records = parse_reservoir_csv(&text);
    log::info!("loader: loaded {} reservoirs from {}", records.len(), resource);
    Ok(records)
}

/// Parse the primary CSV text. Derived fields are computed before returning.
pub fn parse_reservoir_csv(text: &str) -> Vec<ReservoirRecord> {
    let mut lines = text.split('\n');
    let header_width = match lines.next() {
        Some(header) => header.split(',').map(str::trim).count(),
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    let mut dropped = 0u32;
    for (offset, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields = parse_line(line);
        if fields.len() < header_width {
            dropped += 1;
            continue;
        }
        let record = record_from_fields(offset as u32 + 1, &fields);
        if record.is_valid() {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    derive_fields(&mut records);
    if dropped > 0 {
        log::debug!("loader: dropped {} invalid rows", dropped);
    }
    records
}

fn record_from_fields(id: u32, fields: &[String]) -> ReservoirRecord {
    let text = |i: usize| fields.get(i).map(|s| s.trim().to_string()).unwrap_or_default();
    let number = |i: usize| fields.get(i).map(|s| parse_float_or_zero(s)).unwrap_or(0.0);

    ReservoirRecord {
        id,
        name: text(0),
        municipality: text(1),
        capacity: number(2),
        current_volume: number(3),
        usage: text(4),
        coordinates: Coordinates {
            latitude: number(5),
            longitude: number(6),
        },
        last_updated: text(7),
        fill_percentage: 0,
        tier: Tier::Low,
        has_historical_series: false,
    }
}
