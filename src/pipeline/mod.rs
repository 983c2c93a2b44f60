//! Cleaning Pipeline Module
//! Orders the cleaning stages and carries the table from raw load to export.

pub mod category;
pub mod dedup;
pub mod demographics;
pub mod missing;
pub mod mocodes;
pub mod temporal;

use log::info;
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::data::{CrimeLoader, LoaderError, MoCodebook};
use crate::export::{ExportError, Exporter};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error("Invariant violated after {stage}: {detail}")]
    Invariant { stage: &'static str, detail: String },
}

/// Run summary: the counts the operator cares about.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub rows_loaded: usize,
    pub duplicates_removed: usize,
    pub mo_desc_columns: usize,
    pub rows_out: usize,
    pub columns_out: usize,
    pub parquet_path: PathBuf,
    pub preview_path: PathBuf,
}

/// The full cleaning run: load, clean, export.
pub struct CleaningPipeline {
    config: PipelineConfig,
}

impl CleaningPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute all stages in order and persist the canonical dataset.
    pub fn run(&self) -> Result<PipelineReport, PipelineError> {
        let raw = CrimeLoader::load(&self.config.crime_data_path)?;
        let codebook = MoCodebook::from_csv(&self.config.mo_codes_path)?;
        info!(
            "loaded {} rows x {} columns; {} MO codes",
            raw.height(),
            raw.width(),
            codebook.len()
        );
        let rows_loaded = raw.height();

        let (cleaned, duplicates_removed, mo_desc_columns) = clean(&raw, &codebook)?;

        let (parquet_path, preview_path) = Exporter::write(
            &cleaned,
            &self.config.output_dir,
            self.config.preview_rows,
        )?;

        Ok(PipelineReport {
            rows_loaded,
            duplicates_removed,
            mo_desc_columns,
            rows_out: cleaned.height(),
            columns_out: cleaned.width(),
            parquet_path,
            preview_path,
        })
    }
}

/// The transformation core, stages 2-7, independent of any file I/O.
///
/// Returns the canonical table, the duplicate count and the MO column count.
pub fn clean(
    raw: &DataFrame,
    codebook: &MoCodebook,
) -> Result<(DataFrame, usize, usize), PipelineError> {
    let table = missing::fill_missing(raw)?;
    let (table, duplicates_removed) = dedup::drop_duplicates(&table)?;
    let table = temporal::normalize(&table)?;
    let table = demographics::normalize(&table)?;
    let (table, mo_desc_columns) = mocodes::expand(&table, codebook)?;
    let table = category::classify(&table)?;
    Ok((table, duplicates_removed, mo_desc_columns))
}
