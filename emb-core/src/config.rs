use serde::{Deserialize, Serialize};

/// Primary dataset, relative to the hosting page.
pub const DEFAULT_RESERVOIRS_CSV: &str = "BD/embalses_santiago_cuba.csv";

/// Historical precipitation dataset, relative to the hosting page.
pub const DEFAULT_HISTORY_CSV: &str = "BD/precipitaciones_cespedes.csv";

/// Name fragment of the reservoir the historical dataset belongs to.
pub const DEFAULT_HISTORICAL_KEY: &str = "Céspedes";

/// Above this many selected years only the most recent one is overlaid.
pub const DEFAULT_MAX_OVERLAY_YEARS: usize = 5;

/// How long success/error notices stay on screen.
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;

/// Dashboard settings. Every field is optional in JSON and falls back to the
/// defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub reservoirs_csv: String,
    pub history_csv: String,
    pub historical_key: String,
    pub max_overlay_years: usize,
    pub notice_timeout_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            reservoirs_csv: DEFAULT_RESERVOIRS_CSV.to_string(),
            history_csv: DEFAULT_HISTORY_CSV.to_string(),
            historical_key: DEFAULT_HISTORICAL_KEY.to_string(),
            max_overlay_years: DEFAULT_MAX_OVERLAY_YEARS,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"historical_key": "Gilbert", "max_overlay_years": 3}"#)
                .unwrap();
        assert_eq!(config.historical_key, "Gilbert");
        assert_eq!(config.max_overlay_years, 3);
        assert_eq!(config.reservoirs_csv, DEFAULT_RESERVOIRS_CSV);
        assert_eq!(config.notice_timeout_ms, DEFAULT_NOTICE_TIMEOUT_MS);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(DashboardConfig::from_json("{max_overlay_years: }").is_err());
    }
}
