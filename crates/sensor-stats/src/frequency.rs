//! Value frequency tables

use std::collections::HashMap;

/// Hashable identity of an f64; `0.0` and `-0.0` are the same value
fn value_key(x: f64) -> u64 {
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// Counts of each distinct value, in order of first occurrence
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(f64, usize)>,
    index: HashMap<u64, usize>,
}

impl FrequencyTable {
    /// Count the values of a slice
    pub fn from_data(data: &[f64]) -> Self {
        let mut table = Self::default();
        for &x in data {
            table.add(x);
        }
        table
    }

    /// Record one occurrence of `x`
    pub fn add(&mut self, x: f64) {
        let key = value_key(x);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((x, 1));
            }
        }
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Highest count, `None` for an empty table
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|&(_, c)| c).max()
    }

    /// All values sharing the highest count, in first-occurrence order
    pub fn most_frequent(&self) -> Vec<f64> {
        match self.max_count() {
            Some(max) => self
                .entries
                .iter()
                .filter(|&&(_, c)| c == max)
                .map(|&(x, _)| x)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Number of distinct values in a slice
pub fn distinct_count(data: &[f64]) -> usize {
    FrequencyTable::from_data(data).distinct()
}
