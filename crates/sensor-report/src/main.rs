//! sensor-report binary
//!
//! Reports on `DatasetExos.csv` in the working directory.

use sensor_report::{run, ReportConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;

    Ok(())
}
