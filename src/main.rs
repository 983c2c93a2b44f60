//! Crime Pipeline - LAPD Crime Data Cleaning & Curation
//!
//! Loads the raw crime extract and MO-code table named in the config file,
//! runs the cleaning stages, and writes the canonical dataset.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crime_pipeline::config::PipelineConfig;
use crime_pipeline::pipeline::CleaningPipeline;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = PipelineConfig::from_file(Path::new(&config_path))
        .with_context(|| format!("loading pipeline configuration from {config_path}"))?;

    let report = CleaningPipeline::new(config)
        .run()
        .context("cleaning pipeline failed")?;

    info!(
        "done: {} rows in, {} duplicates removed, {} rows x {} columns out ({} MO description columns)",
        report.rows_loaded,
        report.duplicates_removed,
        report.rows_out,
        report.columns_out,
        report.mo_desc_columns
    );
    info!(
        "canonical dataset: {} (preview: {})",
        report.parquet_path.display(),
        report.preview_path.display()
    );
    Ok(())
}
