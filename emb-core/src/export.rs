//! CSV export of the loaded reservoir set.
//!
//! `ExportMode::Compatible` joins fields with bare commas and performs no
//! quoting, so a value containing a comma shifts the columns of its row. The
//! loader accepts quoted fields, so files exported this way do not always
//! read back cleanly. `ExportMode::Strict` quotes where needed.

use crate::reservoir::ReservoirRecord;
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

/// Column header of exported files.
pub const EXPORT_HEADER: [&str; 7] = [
    "Nombre",
    "Municipio",
    "Capacidad (hm³)",
    "Volumen Actual (hm³)",
    "Porcentaje",
    "Uso",
    "Fecha Actualización",
];

/// File name prefix; the export date and `.csv` follow.
pub const EXPORT_FILE_PREFIX: &str = "embalses_santiago_cuba";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Bare comma joining, byte-compatible with the historical dashboard export.
    #[default]
    Compatible,
    /// RFC 4180 quoting of fields that need it.
    Strict,
}

fn row_fields(record: &ReservoirRecord) -> [String; 7] {
    [
        record.name.clone(),
        record.municipality.clone(),
        record.capacity.to_string(),
        record.current_volume.to_string(),
        record.fill_percentage.to_string(),
        record.usage.clone(),
        record.last_updated.clone(),
    ]
}

/// Serialise every record, in order, under [`EXPORT_HEADER`].
pub fn export_csv(records: &[ReservoirRecord], mode: ExportMode) -> anyhow::Result<String> {
    match mode {
        ExportMode::Compatible => Ok(export_compatible(records)),
        ExportMode::Strict => export_strict(records),
    }
}

fn export_compatible(records: &[ReservoirRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(EXPORT_HEADER.join(","));
    lines.extend(records.iter().map(|r| row_fields(r).join(",")));
    lines.join("\n")
}

fn export_strict(records: &[ReservoirRecord]) -> anyhow::Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADER)?;
    for record in records {
        wtr.write_record(row_fields(record))?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `embalses_santiago_cuba_YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}
