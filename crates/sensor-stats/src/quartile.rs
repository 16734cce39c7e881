//! Quartiles by truncated index
//!
//! Each quartile is the sorted value at `floor(p * n)` for p in
//! {0.25, 0.5, 0.75}, with the minimum and maximum at either end. Adjacent
//! ranks are never interpolated, so Q2 differs from the median whenever n
//! is even.

use crate::summary::sorted_copy;
use serde::{Deserialize, Serialize};

/// Five-position summary: minimum, Q1, Q2, Q3, maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q0: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl Quartiles {
    /// Compute quartiles from values with missing entries removed
    ///
    /// Returns `None` for empty data.
    pub fn from_data(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let sorted = sorted_copy(data);
        Some(Self::from_sorted(&sorted))
    }

    /// Quartiles of already sorted, non-empty data
    fn from_sorted(sorted: &[f64]) -> Self {
        let n = sorted.len();
        Self {
            q0: sorted[0],
            q1: sorted[truncated_index(n, 0.25)],
            q2: sorted[truncated_index(n, 0.5)],
            q3: sorted[truncated_index(n, 0.75)],
            q4: sorted[n - 1],
        }
    }

    /// Values in order Q0..Q4
    pub fn as_array(&self) -> [f64; 5] {
        [self.q0, self.q1, self.q2, self.q3, self.q4]
    }
}

/// `floor(fraction * n)`, kept inside the slice
fn truncated_index(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction) as usize).min(n - 1)
}
