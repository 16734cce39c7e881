//! Column types and column storage
//!
//! Every column stores `Option<T>` per row; `None` is the missing marker.
//! Floating point columns never hold `NaN`, it is stored as `None` instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Int64,
    Float64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }

    /// Name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::String => "object",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column of data
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    String(Vec<Option<String>>),
}

impl ColumnData {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            ColumnData::Int64(_) => ColumnType::Int64,
            ColumnData::Float64(_) => ColumnType::Float64,
            ColumnData::Bool(_) => ColumnType::Bool,
            ColumnData::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements, missing included
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value at `row` is missing
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnData::Int64(v) => v[row].is_none(),
            ColumnData::Float64(v) => v[row].is_none(),
            ColumnData::Bool(v) => v[row].is_none(),
            ColumnData::String(v) => v[row].is_none(),
        }
    }

    /// Number of missing values
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_missing(i)).count()
    }

    /// Number of non-missing values
    pub fn non_missing_count(&self) -> usize {
        self.len() - self.missing_count()
    }

    /// Non-missing values as f64, in row order
    ///
    /// Returns `None` unless the column type is numeric.
    pub fn present_f64(&self) -> Option<Vec<f64>> {
        if !self.dtype().is_numeric() {
            return None;
        }
        match self {
            ColumnData::Int64(v) => Some(v.iter().flatten().map(|&x| x as f64).collect()),
            ColumnData::Float64(v) => Some(v.iter().flatten().copied().collect()),
            ColumnData::Bool(_) | ColumnData::String(_) => None,
        }
    }

    /// Render the value at `row` for display; missing values render as `NaN`
    pub fn display_value(&self, row: usize) -> String {
        match self {
            ColumnData::Int64(v) => v[row].map_or_else(missing_text, |x| x.to_string()),
            ColumnData::Float64(v) => v[row].map_or_else(missing_text, format_float),
            ColumnData::Bool(v) => v[row].map_or_else(missing_text, |b| {
                let text = if b { "True" } else { "False" };
                text.to_string()
            }),
            ColumnData::String(v) => v[row].clone().unwrap_or_else(missing_text),
        }
    }
}

fn missing_text() -> String {
    "NaN".to_string()
}

/// Format a float the way the reports print numbers
///
/// Integral values keep a trailing `.0` (`2.0`), everything else uses the
/// shortest representation that round-trips (`2.5`, `0.1`). Magnitudes of
/// 1e16 and above or below 1e-4 switch to exponent form (`1e+20`, `1.5e-05`).
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return missing_text();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(x);
    }
    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Shortest mantissa with a signed, two-digit minimum exponent
fn format_exponent(x: f64) -> String {
    let text = format!("{:e}", x);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => text,
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Column values
    pub data: ColumnData,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        self.data.dtype()
    }
}
