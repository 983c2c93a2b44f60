//! Pipeline Configuration Module
//! Input/output locations, deserialized from a JSON file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Where the pipeline reads from and writes to.
///
/// All paths are caller-supplied; the transformation itself has no other knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Raw LAPD crime extract (CSV, 28 columns).
    pub crime_data_path: PathBuf,
    /// MO-code reference table (CSV, `Code` and `Description` columns).
    pub mo_codes_path: PathBuf,
    /// Directory receiving the Parquet dataset and the CSV preview.
    pub output_dir: PathBuf,
    /// Rows written to the human-inspectable preview export.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_preview_rows() -> usize {
    5000
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_config_and_defaults_preview_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"crime_data_path": "crime.csv", "mo_codes_path": "mo.csv", "output_dir": "out"}}"#
        )
        .unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.crime_data_path, PathBuf::from("crime.csv"));
        assert_eq!(config.preview_rows, 5000);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PipelineConfig::from_file(Path::new("/no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/config.json"));
    }
}
