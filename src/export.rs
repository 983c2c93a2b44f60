//! Exporter Module (stage 8)
//! Persists the canonical dataset: full table to Parquet for downstream
//! reuse, first N rows to CSV for human inspection.

use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PARQUET_FILE: &str = "crime_cleaned.parquet";
pub const PREVIEW_FILE: &str = "crime_cleaned_preview.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Encode { path: PathBuf, source: PolarsError },
}

/// Writes the canonical dataset at the end of a successful run.
pub struct Exporter;

impl Exporter {
    /// Write both artifacts into `output_dir`, creating it if needed.
    ///
    /// Each file is written to a temporary sibling and renamed into place only
    /// after both writes succeed, so a failure never leaves a partial artifact
    /// under the final name. Returns the (parquet, preview) paths.
    pub fn write(
        df: &DataFrame,
        output_dir: &Path,
        preview_rows: usize,
    ) -> Result<(PathBuf, PathBuf), ExportError> {
        fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let parquet_path = output_dir.join(PARQUET_FILE);
        let preview_path = output_dir.join(PREVIEW_FILE);
        let parquet_tmp = output_dir.join(format!("{PARQUET_FILE}.tmp"));
        let preview_tmp = output_dir.join(format!("{PREVIEW_FILE}.tmp"));

        let result = Self::write_tmp(df, &parquet_tmp, &preview_tmp, preview_rows).and_then(
            |()| {
                rename(&parquet_tmp, &parquet_path)?;
                rename(&preview_tmp, &preview_path)?;
                Ok(())
            },
        );
        if result.is_err() {
            let _ = fs::remove_file(&parquet_tmp);
            let _ = fs::remove_file(&preview_tmp);
        }
        result?;

        info!(
            "exported {} rows to {} and a {}-row preview to {}",
            df.height(),
            parquet_path.display(),
            preview_rows.min(df.height()),
            preview_path.display()
        );
        Ok((parquet_path, preview_path))
    }

    fn write_tmp(
        df: &DataFrame,
        parquet_tmp: &Path,
        preview_tmp: &Path,
        preview_rows: usize,
    ) -> Result<(), ExportError> {
        let encode = |path: &Path, source: PolarsError| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let mut full = df.clone();
        let file = create(parquet_tmp)?;
        ParquetWriter::new(file)
            .finish(&mut full)
            .map_err(|e| encode(parquet_tmp, e))?;

        let mut head = df.head(Some(preview_rows));
        let file = create(preview_tmp)?;
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut head)
            .map_err(|e| encode(preview_tmp, e))?;

        Ok(())
    }
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn rename(from: &Path, to: &Path) -> Result<(), ExportError> {
    fs::rename(from, to).map_err(|source| ExportError::Io {
        path: to.to_path_buf(),
        source,
    })
}
