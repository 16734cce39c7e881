//! Per-attribute reports
//!
//! Each reporter looks the attribute up independently and fails with
//! [`ReportError::AttributeNotFound`] when the table has no such column.

use std::collections::HashSet;
use std::fmt;

use sensor_io::{format_float, ColumnData, Table};
use sensor_stats::{distinct_count, CentralTendency, Mode, Quartiles};

use crate::error::{ReportError, ReportResult};

/// Column data for `attribute`, or the not-found error
fn lookup<'a>(table: &'a Table, attribute: &str) -> ReportResult<&'a ColumnData> {
    table
        .data(attribute)
        .ok_or_else(|| ReportError::AttributeNotFound(attribute.to_string()))
}

/// Non-missing values of a numeric attribute
fn numeric_values(table: &Table, attribute: &str) -> ReportResult<Vec<f64>> {
    lookup(table, attribute)?
        .present_f64()
        .ok_or_else(|| ReportError::NotNumeric(attribute.to_string()))
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), format_float)
}

fn format_mode(mode: Option<&Mode>) -> String {
    match mode {
        None => "None".to_string(),
        Some(Mode::Single(x)) => format_float(*x),
        Some(Mode::Tied(xs)) => {
            let items: Vec<String> = xs.iter().map(|&x| format_float(x)).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Mean, median and mode of one attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CentralTendencyReport {
    pub attribute: String,
    pub stats: CentralTendency,
}

/// Central tendency of the non-missing values of `attribute`
pub fn central_tendencies(table: &Table, attribute: &str) -> ReportResult<CentralTendencyReport> {
    let values = numeric_values(table, attribute)?;
    Ok(CentralTendencyReport {
        attribute: attribute.to_string(),
        stats: CentralTendency::from_data(&values),
    })
}

impl fmt::Display for CentralTendencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Central Tendencies for {}:", self.attribute)?;
        write!(
            f,
            "Mean: {}, Median: {}, Mode: {}",
            format_optional(self.stats.mean),
            format_optional(self.stats.median),
            format_mode(self.stats.mode.as_ref())
        )
    }
}

/// Truncating-index quartiles of one attribute
#[derive(Debug, Clone, PartialEq)]
pub struct QuartileReport {
    pub attribute: String,
    pub quartiles: Quartiles,
}

/// Quartiles of the non-missing values of `attribute`
pub fn quartiles(table: &Table, attribute: &str) -> ReportResult<QuartileReport> {
    let values = numeric_values(table, attribute)?;
    let quartiles =
        Quartiles::from_data(&values).ok_or_else(|| ReportError::NoValues(attribute.to_string()))?;
    Ok(QuartileReport {
        attribute: attribute.to_string(),
        quartiles,
    })
}

impl fmt::Display for QuartileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .quartiles
            .as_array()
            .iter()
            .enumerate()
            .map(|(i, &q)| format!("{}: {}", i, format_float(q)))
            .collect();
        write!(f, "Quartiles for {}: {{{}}}", self.attribute, entries.join(", "))
    }
}

/// Missing-value count of one attribute
#[derive(Debug, Clone, PartialEq)]
pub struct MissingValuesReport {
    pub attribute: String,
    pub missing: usize,
    pub total: usize,
}

impl MissingValuesReport {
    /// Share of missing rows in percent, `None` for an empty table
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.missing as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Count missing entries of `attribute` against the table's row count
pub fn missing_values(table: &Table, attribute: &str) -> ReportResult<MissingValuesReport> {
    let data = lookup(table, attribute)?;
    Ok(MissingValuesReport {
        attribute: attribute.to_string(),
        missing: data.missing_count(),
        total: table.num_rows(),
    })
}

impl fmt::Display for MissingValuesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percentage = self
            .percentage()
            .map_or_else(|| "n/a".to_string(), |p| format!("{:.2}%", p));
        write!(
            f,
            "Missing Values for {}: Count = {}, Percentage = {}",
            self.attribute, self.missing, percentage
        )
    }
}

/// Distinct-value count of one attribute
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueValuesReport {
    pub attribute: String,
    pub unique: usize,
}

/// Count distinct non-missing values of `attribute`, any column type
pub fn unique_values(table: &Table, attribute: &str) -> ReportResult<UniqueValuesReport> {
    let unique = match lookup(table, attribute)? {
        ColumnData::Int64(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
        ColumnData::Float64(v) => distinct_count(&v.iter().flatten().copied().collect::<Vec<_>>()),
        ColumnData::Bool(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
        ColumnData::String(v) => v.iter().flatten().collect::<HashSet<_>>().len(),
    };
    Ok(UniqueValuesReport {
        attribute: attribute.to_string(),
        unique,
    })
}

impl fmt::Display for UniqueValuesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unique Values for {}: {}", self.attribute, self.unique)
    }
}
