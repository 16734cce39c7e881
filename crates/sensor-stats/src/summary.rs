//! Central tendency of a numeric attribute
//!
//! Provides:
//! - Mean (sum divided by count)
//! - Median (middle value, or average of the two middle values)
//! - Mode (every value sharing the highest frequency)

use crate::frequency::FrequencyTable;
use serde::{Deserialize, Serialize};

/// The most frequent value(s) of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// A single value has the highest frequency
    Single(f64),
    /// Several values tie for the highest frequency, in first-occurrence order
    Tied(Vec<f64>),
}

/// Mean, median and mode of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralTendency {
    /// Number of values
    pub count: usize,
    /// Mean (average), `None` when there are no values
    pub mean: Option<f64>,
    /// Median (50th percentile), `None` when there are no values
    pub median: Option<f64>,
    /// Mode, `None` when there are no values
    pub mode: Option<Mode>,
}

impl CentralTendency {
    /// Compute central tendency from values with missing entries removed
    pub fn from_data(data: &[f64]) -> Self {
        Self {
            count: data.len(),
            mean: mean(data),
            median: median(data),
            mode: mode(data),
        }
    }
}

/// Sum divided by count
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Middle of the sorted values
pub fn median(data: &[f64]) -> Option<f64> {
    let count = data.len();
    if count == 0 {
        return None;
    }

    let sorted = sorted_copy(data);
    let mid = count / 2;
    if count % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Value(s) with the highest frequency
pub fn mode(data: &[f64]) -> Option<Mode> {
    let mut most = FrequencyTable::from_data(data).most_frequent();
    match most.len() {
        0 => None,
        1 => most.pop().map(Mode::Single),
        _ => Some(Mode::Tied(most)),
    }
}

/// Ascending copy of the data
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        let stats = CentralTendency::from_data(&[1.0, 2.0, 2.0, 3.0]);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, Some(2.0));
        assert_eq!(stats.median, Some(2.0));
        assert_eq!(stats.mode, Some(Mode::Single(2.0)));
    }

    #[test]
    fn test_all_unique_reports_full_tie() {
        let stats = CentralTendency::from_data(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(stats.median, Some(2.5));
        assert_eq!(stats.mode, Some(Mode::Tied(vec![1.0, 2.0, 3.0, 4.0])));
    }

    #[test]
    fn test_median_odd_unsorted() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_mean_fractional() {
        let m = mean(&[0.1, 0.2, 0.4]).unwrap();
        assert!((m - 0.7 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tied_mode_keeps_first_occurrence_order() {
        assert_eq!(
            mode(&[5.0, 3.0, 3.0, 5.0, 1.0]),
            Some(Mode::Tied(vec![5.0, 3.0]))
        );
    }

    #[test]
    fn test_empty_data() {
        let stats = CentralTendency::from_data(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.mode, None);
    }
}
