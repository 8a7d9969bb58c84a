//! Loading the datasets the way the dashboard does.

use crate::args::SourceArgs;
use emb_core::config::DashboardConfig;
use emb_core::loader::{CsvSource, LoadError};
use emb_core::source::{FileSource, HttpSource};
use emb_data::dashboard::Dashboard;
use log::{info, warn};
use std::path::Path;

/// Local directory or remote base URL.
pub enum CliSource {
    Files(FileSource),
    Http(HttpSource),
}

impl CliSource {
    pub fn from_args(args: &SourceArgs) -> anyhow::Result<Self> {
        match &args.base_url {
            Some(url) => {
                let client = reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(60))
                    .build()?;
                Ok(CliSource::Http(HttpSource::new(client, url.clone())))
            }
            None => Ok(CliSource::Files(FileSource::new(&args.data_dir))),
        }
    }
}

impl CsvSource for CliSource {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        match self {
            CliSource::Files(source) => source.fetch_text(resource).await,
            CliSource::Http(source) => source.fetch_text(resource).await,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
            DashboardConfig::from_json(&text)
        }
        None => Ok(DashboardConfig::default()),
    }
}

/// Load the primary dataset (required) and the historical series (optional).
pub async fn open_dashboard(args: &SourceArgs) -> anyhow::Result<Dashboard> {
    let config = load_config(args.config.as_deref())?;
    let source = CliSource::from_args(args)?;
    let mut dashboard = Dashboard::new(config);

    let count = dashboard.refresh(&source).await?;
    info!("Loaded {} reservoirs", count);
    if dashboard.history().is_none() {
        warn!("Historical series unavailable");
    }
    Ok(dashboard)
}
