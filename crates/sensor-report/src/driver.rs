//! Load one dataset and run every report on it

use std::fmt::Display;
use std::io::Write;

use sensor_io::{load_table, Table};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::info::basic_info;
use crate::reporters::{central_tendencies, missing_values, quartiles, unique_values};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The dataset loaded and every report was attempted
    Completed {
        /// Reports written successfully
        written: usize,
        /// Reports replaced by an attribute error message
        failed: usize,
    },
    /// The dataset could not be loaded; nothing was reported
    Skipped,
}

/// Load the configured dataset and write all reports to `out`
///
/// A load failure is written as a message and yields [`RunOutcome::Skipped`].
/// Only an invalid configuration or a failing writer returns `Err`.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> ReportResult<RunOutcome> {
    config.validate()?;

    let table = match load_table(&config.file_path, &config.load) {
        Ok(table) => table,
        Err(e) => {
            tracing::debug!("Load of {:?} failed: {}", config.file_path, e);
            writeln!(out, "{}", ReportError::Load(e))?;
            return Ok(RunOutcome::Skipped);
        }
    };

    run_reports(&table, config, out)
}

/// Write all reports for an already loaded table
pub fn run_reports<W: Write>(
    table: &Table,
    config: &ReportConfig,
    out: &mut W,
) -> ReportResult<RunOutcome> {
    writeln!(out, "{}", basic_info(table, config.head_rows))?;

    let attribute = config.attribute.as_str();
    let results = [
        emit(out, central_tendencies(table, attribute))?,
        emit(out, quartiles(table, attribute))?,
        emit(out, missing_values(table, attribute))?,
        emit(out, unique_values(table, &config.unique_attribute))?,
    ];

    let written = 1 + results.iter().filter(|&&ok| ok).count();
    let failed = results.len() + 1 - written;
    Ok(RunOutcome::Completed { written, failed })
}

/// Write a report, or its attribute error in its place
///
/// Returns whether the report itself was written.
fn emit<W: Write, R: Display>(out: &mut W, result: ReportResult<R>) -> ReportResult<bool> {
    match result {
        Ok(report) => {
            writeln!(out, "{}", report)?;
            Ok(true)
        }
        Err(e) if e.is_attribute_error() => {
            tracing::debug!("Report skipped: {}", e);
            writeln!(out, "{}", e)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
