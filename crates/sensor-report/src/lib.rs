//! sensor-report - Descriptive statistics report for sensor datasets
//!
//! Loads an accelerometer/gyroscope export and prints:
//!
//! - **Basic info**: columns, types, non-missing counts and the first rows
//! - **Central tendency**: mean, median and mode of an attribute
//! - **Quartiles**: truncating-index quartiles of an attribute
//! - **Missing values**: count and share of missing entries
//! - **Unique values**: number of distinct values
//!
//! Every reporter checks for its attribute on its own, so an unknown
//! attribute only replaces that report with a message.

pub mod config;
pub mod driver;
pub mod error;
pub mod info;
pub mod reporters;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use info::*;
pub use reporters::*;
