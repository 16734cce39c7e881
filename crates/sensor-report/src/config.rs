//! Configuration for sensor-report
//!
//! Which file to load, how to parse it and which attributes to report on.
//! The binary runs with [`ReportConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ReportError;
use sensor_io::LoadOptions;

/// Dataset loaded by default
pub const DEFAULT_DATASET: &str = "DatasetExos.csv";

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Dataset to load
    pub file_path: PathBuf,
    /// Attribute for central tendency, quartiles and missing values
    pub attribute: String,
    /// Attribute for the unique-value count
    pub unique_attribute: String,
    /// Rows shown in the basic info preview
    pub head_rows: usize,
    /// Parsing options
    pub load: LoadOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_DATASET),
            attribute: "Acc_x".to_string(),
            unique_attribute: "ID".to_string(),
            head_rows: 5,
            load: LoadOptions::default(),
        }
    }
}

impl ReportConfig {
    /// Defaults with a different dataset path
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(ReportError::Config("file_path must not be empty".to_string()));
        }

        if self.attribute.is_empty() || self.unique_attribute.is_empty() {
            return Err(ReportError::Config(
                "attribute names must not be empty".to_string(),
            ));
        }

        if self.head_rows == 0 {
            return Err(ReportError::Config("head_rows must be positive".to_string()));
        }

        self.load
            .validate()
            .map_err(|e| ReportError::Config(e.to_string()))
    }
}
