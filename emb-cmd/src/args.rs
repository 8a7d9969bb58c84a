//! Arguments shared by several subcommands.

use clap::Args;
use emb_data::filter::{FilterOptions, MonthRange, YearRange};
use std::path::PathBuf;

/// Where the datasets come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the `BD/` folder
    #[arg(short = 'd', long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Fetch from the URL the dashboard is served from instead of `--data-dir`
    #[arg(long)]
    pub base_url: Option<String>,

    /// JSON configuration file overriding dataset paths and limits
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name and municipality
    #[arg(short = 's', long, default_value = "")]
    pub search: String,

    /// Year or inclusive year range, e.g. `2023` or `2019-2023`
    #[arg(short = 'y', long)]
    pub years: Option<YearRange>,

    /// Month or inclusive month range, by number or Spanish name, e.g. `3-6` or `marzo-junio`
    #[arg(short = 'm', long)]
    pub months: Option<MonthRange>,
}

impl FilterArgs {
    pub fn to_options(&self) -> FilterOptions {
        FilterOptions {
            search_text: self.search.clone(),
            year_range: self.years,
            month_range: self.months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
    }

    #[test]
    fn test_parse_filter_args() {
        let cli = TestCli::parse_from([
            "emb", "--search", "santiago", "--years", "2019-2023", "--months", "marzo-junio",
        ]);
        let options = cli.filters.to_options();
        assert_eq!(options.search_text, "santiago");
        assert_eq!(options.year_range, Some(YearRange::new(2019, 2023)));
        assert_eq!(options.month_range, MonthRange::new(3, 6));
        assert_eq!(cli.source.data_dir, PathBuf::from("."));
        assert!(cli.source.base_url.is_none());
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(TestCli::try_parse_from(["emb", "--months", "13"]).is_err());
    }

    #[test]
    fn test_no_filters_is_empty() {
        let cli = TestCli::parse_from(["emb"]);
        assert!(cli.filters.to_options().is_empty());
    }
}
