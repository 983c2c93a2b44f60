//! Raw Data Loader Module
//! Reads the raw crime extract and the MO-code reference table using Polars.

use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::schema::{self, NONE_SENTINEL, REQUIRED_COLUMNS};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV {path}: {source}")]
    Csv { path: PathBuf, source: PolarsError },
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Loads the raw crime table, validating the expected 28-column schema.
pub struct CrimeLoader;

impl CrimeLoader {
    /// Load the raw crime extract.
    ///
    /// Fails up front, naming the path and the first missing column, so no
    /// transformation starts against a malformed source.
    pub fn load(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = read_csv(path)?;

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|n| n == required) {
                return Err(LoaderError::MissingColumn {
                    path: path.to_path_buf(),
                    column: required.to_string(),
                });
            }
        }

        Ok(df)
    }
}

/// MO-code -> description lookup, keyed by the 4-character zero-padded code.
///
/// Built once from the reference table and immutable for the rest of the run.
#[derive(Debug)]
pub struct MoCodebook {
    map: HashMap<String, String>,
}

impl MoCodebook {
    /// Build the codebook from the two-column reference CSV (`Code`, `Description`).
    pub fn from_csv(path: &Path) -> Result<Self, LoaderError> {
        let df = read_csv(path)?;

        let missing = |column: &str| LoaderError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        };
        let codes = df
            .column("Code")
            .map_err(|_| missing("Code"))?
            .cast(&DataType::String)?;
        let descriptions = df
            .column("Description")
            .map_err(|_| missing("Description"))?
            .cast(&DataType::String)?;

        let pairs = codes
            .str()?
            .into_iter()
            .zip(descriptions.str()?)
            .filter_map(|(code, desc)| Some((code?.to_string(), desc?.to_string())));
        Ok(Self::from_pairs(pairs))
    }

    /// Build a codebook from in-memory pairs; keys are zero-padded to 4 chars.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let map = pairs
            .into_iter()
            .map(|(code, desc)| (schema::zero_pad_code(&code), desc))
            .collect();
        Self { map }
    }

    /// Look up a code (short forms tolerated); unmatched codes become "None".
    pub fn describe(&self, code: &str) -> String {
        self.map
            .get(&schema::zero_pad_code(code))
            .cloned()
            .unwrap_or_else(|| NONE_SENTINEL.to_string())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    // Lazy scan with generous inference, matching the raw feed's loose typing
    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        })
}
