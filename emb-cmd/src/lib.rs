//! Command implementations for the reservoir CLI.
//!
//! Every subcommand loads the same datasets the dashboard loads, either from
//! a local directory or from the URL the dashboard is served from, and then
//! runs one step of the pipeline on them.

use clap::Subcommand;

pub mod args;
pub mod export;
pub mod session;
pub mod simulate;
pub mod summary;
pub mod trend;

use args::{FilterArgs, SourceArgs};

#[derive(Subcommand)]
pub enum Command {
    /// Print statistics and the reservoir list after applying filters
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export the full reservoir set as CSV
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path; defaults to `embalses_santiago_cuba_<date>.csv` in the current directory
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Quote fields containing commas or quotes
        #[arg(long)]
        strict: bool,
    },

    /// Print the monthly precipitation trend of a reservoir
    Trend {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Reservoir id or part of its name
        #[arg(short = 'r', long)]
        reservoir: String,
    },

    /// Run simulated volume updates and print the resulting statistics
    Simulate {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of updates to run
        #[arg(short = 'n', long, default_value_t = 1)]
        ticks: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Also export the simulated set to this path
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { source, filters } => summary::run_summary(&source, &filters).await,
        Command::Export {
            source,
            output,
            strict,
        } => export::run_export(&source, output.as_deref(), strict).await,
        Command::Trend {
            source,
            filters,
            reservoir,
        } => trend::run_trend(&source, &filters, &reservoir).await,
        Command::Simulate {
            source,
            ticks,
            seed,
            output,
        } => simulate::run_simulate(&source, ticks, seed, output.as_deref()).await,
    }
}
