//! Core types and loaders for Santiago de Cuba reservoir (embalse) data.
//!
//! - `csv_line`: quote-aware single line tokenizer
//! - `reservoir`: the reservoir record and its derived fill tier
//! - `loader`: primary CSV ingestion and the `CsvSource` fetch seam
//! - `history`: the secondary per-year precipitation dataset
//! - `source`: file and HTTP sources, cache busting, gzip decoding
//! - `export`: CSV re-serialisation of the loaded set
//! - `config`: dashboard configuration

pub mod config;
pub mod csv_line;
pub mod export;
pub mod history;
pub mod loader;
pub mod reservoir;
pub mod source;
