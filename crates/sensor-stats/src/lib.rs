//! sensor-stats - Descriptive statistics for sensor datasets
//!
//! Pure functions over the non-missing values of one attribute:
//!
//! - **Central tendency**: mean, median and (possibly tied) mode
//! - **Quartiles**: truncating-index positions into the sorted values
//! - **Frequencies**: first-occurrence ordered value counts, distinct counts
//!
//! Every function takes values with missing entries already removed and
//! returns `None` when there is nothing to summarize.

pub mod frequency;
pub mod quartile;
pub mod summary;

pub use frequency::*;
pub use quartile::*;
pub use summary::*;
