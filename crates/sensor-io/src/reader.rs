//! Load options and error types
//!
//! `LoadOptions` controls how a delimited file becomes a [`Table`]:
//! field separator, decimal marker, which tokens count as missing, what to
//! do with malformed rows and which columns are coerced to numbers.

use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("No columns to parse from file")]
    EmptyInput,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Error tokenizing data. Line {line}: expected {expected} fields, saw {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Tokens treated as missing when no other list is given
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["NaN", "NA", "", " "];

/// Tokens that are missing in addition to the configured ones when
/// `keep_default_missing` is set
pub const STANDARD_MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NULL", "None", "n/a", "nan", "null",
];

/// Columns coerced to numeric type by default
pub const DEFAULT_NUMERIC_COLUMNS: &[&str] =
    &["Acc_x", "Acc_y", "Acc_z", "Gyro_x", "Gyro_y", "Gyro_z", "Set"];

/// What to do with a row that has more fields than the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadLinePolicy {
    /// Abort the load
    Error,
    /// Log a warning and drop the row
    #[default]
    Warn,
    /// Drop the row silently
    Skip,
}

/// Options for loading a delimited file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Field separator
    pub delimiter: char,

    /// Decimal marker used by numeric fields
    pub decimal: char,

    /// Tokens that mark a field as missing
    pub missing_tokens: Vec<String>,

    /// Also treat [`STANDARD_MISSING_TOKENS`] as missing
    pub keep_default_missing: bool,

    /// Handling of rows with too many fields
    pub on_bad_lines: BadLinePolicy,

    /// Columns coerced to numeric type after parsing
    pub numeric_columns: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            decimal: '.',
            missing_tokens: DEFAULT_MISSING_TOKENS.iter().map(|s| s.to_string()).collect(),
            keep_default_missing: true,
            on_bad_lines: BadLinePolicy::Warn,
            numeric_columns: DEFAULT_NUMERIC_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LoadOptions {
    /// Set the field separator
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the decimal marker
    pub fn with_decimal(mut self, decimal: char) -> Self {
        self.decimal = decimal;
        self
    }

    /// Set the malformed-row policy
    pub fn with_bad_lines(mut self, policy: BadLinePolicy) -> Self {
        self.on_bad_lines = policy;
        self
    }

    /// Replace the list of coerced columns
    pub fn with_numeric_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a raw field is a missing token
    pub fn is_missing_token(&self, field: &str) -> bool {
        self.missing_tokens.iter().any(|t| t == field)
            || (self.keep_default_missing && STANDARD_MISSING_TOKENS.contains(&field))
    }

    /// Delimiter as a single byte, if it is ASCII
    pub fn delimiter_byte(&self) -> Option<u8> {
        ascii_byte(self.delimiter)
    }

    /// Check that the separator and decimal marker are usable
    pub fn validate(&self) -> IoResult<()> {
        if self.delimiter_byte().is_none() {
            return Err(IoError::InvalidFormat(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        if ascii_byte(self.decimal).is_none() {
            return Err(IoError::InvalidFormat(format!(
                "decimal marker must be a single ASCII character, got {:?}",
                self.decimal
            )));
        }
        if self.delimiter == self.decimal {
            return Err(IoError::InvalidFormat(
                "delimiter and decimal marker must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn ascii_byte(c: char) -> Option<u8> {
    if c.is_ascii() {
        Some(c as u8)
    } else {
        None
    }
}

/// Load a delimited file into a table
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> IoResult<Table> {
    crate::csv_reader::CsvReader::new(options.clone()).read_path(path)
}
