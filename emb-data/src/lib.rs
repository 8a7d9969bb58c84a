//! Data processing for reservoir records.
//!
//! This crate turns the loaded record set into the views the dashboard
//! shows: the filtered working subset, summary statistics, the detail panel,
//! historical trend statistics and chart payloads. [`dashboard::Dashboard`]
//! owns the in-memory state and sequences reloads.

pub mod aggregate;
pub mod charts;
pub mod dashboard;
pub mod detail;
pub mod filter;
pub mod simulate;
pub mod status;
pub mod trend;
