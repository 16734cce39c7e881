//! Report errors

use sensor_io::IoError;
use thiserror::Error;

/// Errors produced while building or writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Attribute '{0}' not found in the dataset.")]
    AttributeNotFound(String),

    #[error("Attribute '{0}' is not numeric.")]
    NotNumeric(String),

    #[error("Attribute '{0}' has no non-missing values.")]
    NoValues(String),

    #[error("Error loading dataset: {0}")]
    Load(#[from] IoError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// Errors that concern a single attribute and leave other reports unaffected
    pub fn is_attribute_error(&self) -> bool {
        matches!(
            self,
            ReportError::AttributeNotFound(_)
                | ReportError::NotNumeric(_)
                | ReportError::NoValues(_)
        )
    }
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
