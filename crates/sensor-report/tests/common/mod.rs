//! Test fixture utilities

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Write `contents` to a temporary `.csv` file
#[allow(dead_code)]
pub fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Run a report into a string
#[allow(dead_code)]
pub fn run_to_string(
    config: &sensor_report::ReportConfig,
) -> (sensor_report::RunOutcome, String) {
    let mut out = Vec::new();
    let outcome = sensor_report::run(config, &mut out).expect("run report");
    (outcome, String::from_utf8(out).expect("utf-8 output"))
}
