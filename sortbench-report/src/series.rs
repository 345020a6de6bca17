//! Aggregated per-algorithm time series.

use serde::Serialize;
use sortbench_core::{Algorithm, Measure};

/// Mean timings per algorithm, positionally aligned with the size sequence.
///
/// One row is appended per configured array size via [`push_mean`], so every
/// algorithm's series is always exactly as long as the number of sizes
/// processed so far; there is no way to append a partial row.
///
/// [`push_mean`]: SeriesTable::push_mean
#[derive(Debug, Clone, Serialize)]
pub struct SeriesTable {
    sizes: Vec<u64>,
    cppsort: Vec<f64>,
    qsort: Vec<f64>,
    qqsort: Vec<f64>,
}

impl SeriesTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            sizes: Vec::new(),
            cppsort: Vec::new(),
            qsort: Vec::new(),
            qqsort: Vec::new(),
        }
    }

    /// Append the mean measure for the next array size.
    pub fn push_mean(&mut self, size: u64, mean: &Measure) {
        self.sizes.push(size);
        self.cppsort.push(mean.value(Algorithm::CppSort));
        self.qsort.push(mean.value(Algorithm::Qsort));
        self.qqsort.push(mean.value(Algorithm::Qqsort));
    }

    /// The ordered array-size sequence.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// The mean series for one algorithm, aligned with [`sizes`].
    ///
    /// [`sizes`]: SeriesTable::sizes
    pub fn series(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::CppSort => &self.cppsort,
            Algorithm::Qsort => &self.qsort,
            Algorithm::Qqsort => &self.qqsort,
        }
    }

    /// Number of size configurations recorded.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no configurations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Largest mean value across all series, for axis scaling.
    pub fn max_value(&self) -> f64 {
        Algorithm::ALL
            .iter()
            .flat_map(|&algorithm| self.series(algorithm))
            .copied()
            .fold(0.0, f64::max)
    }
}

impl Default for SeriesTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stay_aligned_with_sizes() {
        let mut table = SeriesTable::new();
        table.push_mean(1_000, &Measure::new(12.0, 45.0, 9.0));
        table.push_mean(10_000, &Measure::new(130.0, 480.0, 95.0));

        assert_eq!(table.sizes(), &[1_000, 10_000]);
        for algorithm in Algorithm::ALL {
            assert_eq!(table.series(algorithm).len(), table.len());
        }
        assert_eq!(table.series(Algorithm::Qsort), &[45.0, 480.0]);
    }

    #[test]
    fn max_value_spans_all_series() {
        let mut table = SeriesTable::new();
        table.push_mean(1_000, &Measure::new(12.0, 45.0, 9.0));
        table.push_mean(10_000, &Measure::new(130.0, 480.0, 95.0));
        assert_eq!(table.max_value(), 480.0);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = SeriesTable::new();
        assert!(table.is_empty());
        assert_eq!(table.max_value(), 0.0);
    }
}
