//! `export`: write the full reservoir set as CSV.

use crate::args::SourceArgs;
use crate::session::open_dashboard;
use chrono::Local;
use emb_core::export::{export_file_name, ExportMode};
use emb_data::dashboard::Dashboard;
use log::info;

pub async fn run_export(source: &SourceArgs, output: Option<&str>, strict: bool) -> anyhow::Result<()> {
    let dashboard = open_dashboard(source).await?;
    let path = write_export(&dashboard, output, strict)?;
    println!("{}", path);
    Ok(())
}

/// Write the export and return the path written.
pub fn write_export(dashboard: &Dashboard, output: Option<&str>, strict: bool) -> anyhow::Result<String> {
    let mode = if strict {
        ExportMode::Strict
    } else {
        ExportMode::Compatible
    };
    let text = dashboard.export(mode)?;
    let path = match output {
        Some(path) => path.to_string(),
        None => export_file_name(Local::now().date_naive()),
    };
    std::fs::write(&path, text)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
    info!("Exported {} reservoirs to {}", dashboard.records().len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::sample_args;

    #[tokio::test]
    async fn test_export_sample_data() {
        let dashboard = open_dashboard(&sample_args()).await.unwrap();
        let path = std::env::temp_dir().join(format!("emb-export-{}.csv", std::process::id()));
        let path_str = path.to_string_lossy().to_string();
        let written = write_export(&dashboard, Some(&path_str), true).unwrap();
        assert_eq!(written, path_str);

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("Nombre,Municipio,Capacidad (hm³)"));
        assert!(text.contains("\"San Luis, Santiago de Cuba\""));
    }
}
