//! Simulated portfolio-value paths
//!
//! The matrix is stored run-major: each simulated run owns one contiguous
//! column of `num_trading_days + 1` values, which is also what lets parallel
//! workers generate disjoint columns without coordination. Memory is
//! `8 * (num_trading_days + 1) * num_simulations` bytes; a 30-year, 500-run
//! request holds ~3.8M values (~30 MB), which is the engine's dominant
//! footprint for large requests.

use serde::{Deserialize, Serialize};

/// Cumulative portfolio-value multipliers for every simulated run.
///
/// Logical shape is `(num_trading_days + 1) rows x num_simulations columns`;
/// row 0 is the normalized starting value 1.0. Immutable after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathMatrix {
    values: Vec<f64>,
    num_rows: usize,
    num_runs: usize,
}

impl PathMatrix {
    /// Assemble a matrix from per-run columns.
    ///
    /// Every column must have the same length. Panics are avoided upstream by
    /// construction: the generator always emits `num_trading_days + 1` values.
    pub(crate) fn from_columns(columns: Vec<Vec<f64>>) -> Self {
        let num_runs = columns.len();
        let num_rows = columns.first().map_or(0, Vec::len);
        debug_assert!(columns.iter().all(|c| c.len() == num_rows));

        let mut values = Vec::with_capacity(num_rows * num_runs);
        for column in columns {
            values.extend_from_slice(&column);
        }

        Self {
            values,
            num_rows,
            num_runs,
        }
    }

    /// `(rows, columns)` = `(num_trading_days + 1, num_simulations)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_runs)
    }

    /// Value at a given day (row) and run (column)
    #[must_use]
    pub fn get(&self, day: usize, run: usize) -> f64 {
        self.values[run * self.num_rows + day]
    }

    /// One run's full value path, for line plotting
    #[must_use]
    pub fn path(&self, run: usize) -> &[f64] {
        &self.values[run * self.num_rows..(run + 1) * self.num_rows]
    }

    /// All runs' paths in run order
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.num_runs).map(|run| self.path(run))
    }

    /// The final-day value of every run, for histogram plotting and summary
    /// statistics
    #[must_use]
    pub fn terminal_values(&self) -> Vec<f64> {
        (0..self.num_runs)
            .map(|run| self.values[(run + 1) * self.num_rows - 1])
            .collect()
    }
}
