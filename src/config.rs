//! Run configuration for `read_and_validate`.
//!
//! Every field has a default matching the project's `data/` layout, so a JSON
//! config only needs the keys it overrides:
//!
//! ```json
//! { "raw_path": "data/raw/adult.data", "processed_dir": "data/processed" }
//! ```

use crate::error::{Result, ResultExt as _};
use crate::schema::TableSchema;
use crate::validation::DEFAULT_LOG_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RAW_PATH: &str = "data/raw/adult.data";
pub const DEFAULT_PROCESSED_DIR: &str = "data/processed";
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_data.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Raw `.data` artifact produced by the download step
    pub raw_path: PathBuf,
    /// Directory the cleaned CSV is written into
    pub processed_dir: PathBuf,
    pub output_file_name: String,
    /// Validation-error log, truncated at the start of every run
    pub log_path: PathBuf,
    /// JSON rule set replacing the built-in adult schema
    pub schema_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            processed_dir: PathBuf::from(DEFAULT_PROCESSED_DIR),
            output_file_name: DEFAULT_OUTPUT_FILE.to_owned(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            schema_path: None,
        }
    }
}

impl PipelineConfig {
    pub fn new(raw_path: impl Into<PathBuf>, processed_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_path: raw_path.into(),
            processed_dir: processed_dir.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Fails if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured rule set, or the built-in adult schema.
    ///
    /// # Errors
    ///
    /// Fails if `schema_path` is set and the file is unreadable or malformed.
    pub fn load_schema(&self) -> Result<TableSchema> {
        match &self.schema_path {
            Some(path) => TableSchema::from_file(path),
            None => Ok(TableSchema::adult_income()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CensusError;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.log_path, PathBuf::from("data/logs/validation_errors.log"));
        assert_eq!(config.processed_dir, PathBuf::from("data/processed"));
        assert_eq!(config.output_file_name, "cleaned_data.csv");
        assert!(config.schema_path.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<()> {
        let config = PipelineConfig::from_json(r#"{ "processed_dir": "out" }"#)?;
        assert_eq!(config.processed_dir, PathBuf::from("out"));
        assert_eq!(config.raw_path, PathBuf::from(DEFAULT_RAW_PATH));
        assert_eq!(config.output_file_name, DEFAULT_OUTPUT_FILE);
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = PipelineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CensusError::Config(_)));
    }

    #[test]
    fn test_load_schema_default_and_custom() -> anyhow::Result<()> {
        let config = PipelineConfig::new("a.data", "out");
        assert_eq!(config.load_schema()?.name, "adult_income");

        let dir = tempfile::tempdir()?;
        let schema_path = dir.path().join("schema.json");
        std::fs::write(
            &schema_path,
            r#"{ "name": "tiny", "columns": [ { "name": "x", "kind": "integer" } ] }"#,
        )?;
        let config = PipelineConfig {
            schema_path: Some(schema_path),
            ..config
        };
        assert_eq!(config.load_schema()?.name, "tiny");
        Ok(())
    }
}
