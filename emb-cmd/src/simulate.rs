//! `simulate`: run simulated volume updates.

use crate::args::SourceArgs;
use crate::export::write_export;
use crate::session::open_dashboard;
use crate::summary::format_summary;
use emb_data::dashboard::Dashboard;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub async fn run_simulate(
    source: &SourceArgs,
    ticks: u32,
    seed: Option<u64>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let mut dashboard = open_dashboard(source).await?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_ticks(&mut dashboard, ticks, &mut rng);
    print!("{}", format_summary(&dashboard)?);
    if let Some(path) = output {
        write_export(&dashboard, Some(path), false)?;
    }
    Ok(())
}

pub fn run_ticks(dashboard: &mut Dashboard, ticks: u32, rng: &mut StdRng) {
    for _ in 0..ticks {
        dashboard.simulate_tick(rng);
    }
    info!("Ran {} simulated updates", ticks);
}
