//! emb-cli - command line access to the reservoir datasets behind the dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "emb-cli",
    version,
    about = "Santiago de Cuba reservoir data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: emb_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("emb-cli starting");
    emb_cmd::run(cli.command).await
}
