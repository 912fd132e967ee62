//! Forecast outputs
//!
//! Contains the terminal-distribution summary, its dollar-amount conversion,
//! and the per-request result bundle. The summary exposes named fields; the
//! historical 10-element positional layout is kept as [`SummaryStatistics::as_array`]
//! because downstream dollar conversions index the confidence bounds by
//! position (8 = lower 95% bound, 9 = upper).

use serde::{Deserialize, Serialize};

use crate::model::paths::PathMatrix;

/// Summary of the terminal-value distribution across all simulated runs.
///
/// All values are multipliers relative to a starting portfolio value of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of simulated runs
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std_dev: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
    /// 2.5th percentile, lower bound of the 95% confidence interval
    pub lower_bound_95: f64,
    /// 97.5th percentile, upper bound of the 95% confidence interval
    pub upper_bound_95: f64,
}

impl SummaryStatistics {
    /// Summarize a terminal-value distribution.
    ///
    /// Percentiles use linear interpolation between order statistics.
    #[must_use]
    pub fn from_terminal_values(terminal: &[f64]) -> Self {
        let count = terminal.len();
        let mut sorted = terminal.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = terminal.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let var = terminal.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };

        Self {
            count,
            mean,
            std_dev,
            min: sorted[0],
            p25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.50),
            p75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
            lower_bound_95: percentile(&sorted, 0.025),
            upper_bound_95: percentile(&sorted, 0.975),
        }
    }

    /// Positional view: `[count, mean, std, min, p25, p50, p75, max, p2.5, p97.5]`
    #[must_use]
    pub fn as_array(&self) -> [f64; 10] {
        [
            self.count as f64,
            self.mean,
            self.std_dev,
            self.min,
            self.p25,
            self.median,
            self.p75,
            self.max,
            self.lower_bound_95,
            self.upper_bound_95,
        ]
    }

    /// Convert the 95% confidence bounds into a dollar range for a given
    /// starting capital, rounded to cents.
    #[must_use]
    pub fn dollar_range(&self, initial_investment: f64) -> DollarRange {
        let lower = round_cents(self.lower_bound_95 * initial_investment);
        let upper = round_cents(self.upper_bound_95 * initial_investment);
        DollarRange {
            lower,
            upper,
            loss_risk: lower < initial_investment,
        }
    }
}

/// Linear-interpolation percentile of a sorted, non-empty slice. `q` in [0, 1].
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Dollar-amount 95% interval for a specific initial investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DollarRange {
    pub lower: f64,
    pub upper: f64,
    /// True when the lower bound ends below the starting capital, i.e. the
    /// forecast cannot rule out a loss at the 95% level.
    pub loss_risk: bool,
}

/// Complete output of one forecast request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Full value matrix, retained for path visualization
    pub paths: PathMatrix,
    /// Terminal-distribution summary
    pub summary: SummaryStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_known_values() {
        // 1..=5 as terminal multipliers
        let s = SummaryStatistics::from_terminal_values(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        assert_eq!(s.count, 5);
        assert!((s.mean - 3.0).abs() < 1e-12);
        assert!((s.std_dev - (2.5f64).sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.p25, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.p75, 4.0);
        assert_eq!(s.max, 5.0);
        // Interpolated tails: rank 0.025 * 4 = 0.1, 0.975 * 4 = 3.9
        assert!((s.lower_bound_95 - 1.1).abs() < 1e-12);
        assert!((s.upper_bound_95 - 4.9).abs() < 1e-12);
    }

    #[test]
    fn test_array_layout_is_fixed() {
        let s = SummaryStatistics::from_terminal_values(&[1.0, 2.0, 3.0, 4.0]);
        let a = s.as_array();
        assert_eq!(a.len(), 10);
        assert_eq!(a[0], 4.0);
        assert_eq!(a[1], s.mean);
        assert_eq!(a[2], s.std_dev);
        assert_eq!(a[3], s.min);
        assert_eq!(a[4], s.p25);
        assert_eq!(a[5], s.median);
        assert_eq!(a[6], s.p75);
        assert_eq!(a[7], s.max);
        assert_eq!(a[8], s.lower_bound_95);
        assert_eq!(a[9], s.upper_bound_95);
    }

    #[test]
    fn test_percentile_ordering_invariant() {
        let values: Vec<f64> = (0..997).map(|i| ((i * 37) % 1000) as f64 / 100.0).collect();
        let s = SummaryStatistics::from_terminal_values(&values);
        assert!(s.min <= s.lower_bound_95);
        assert!(s.lower_bound_95 <= s.p25);
        assert!(s.p25 <= s.median);
        assert!(s.median <= s.p75);
        assert!(s.p75 <= s.upper_bound_95);
        assert!(s.upper_bound_95 <= s.max);
    }

    #[test]
    fn test_dollar_range_rounds_to_cents() {
        let s = SummaryStatistics {
            count: 500,
            mean: 2.0,
            std_dev: 0.5,
            min: 0.4,
            p25: 1.5,
            median: 2.0,
            p75: 2.5,
            max: 6.0,
            lower_bound_95: 0.731239,
            upper_bound_95: 4.218967,
        };
        let range = s.dollar_range(20_000.0);
        assert_eq!(range.lower, 14_624.78);
        assert_eq!(range.upper, 84_379.34);
        assert!(range.loss_risk);

        let safe = SummaryStatistics {
            lower_bound_95: 1.2,
            ..s
        }
        .dollar_range(20_000.0);
        assert!(!safe.loss_risk);
    }

    #[test]
    fn test_single_run_summary() {
        let s = SummaryStatistics::from_terminal_values(&[1.5]);
        assert_eq!(s.count, 1);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.min, 1.5);
        assert_eq!(s.max, 1.5);
        assert_eq!(s.lower_bound_95, 1.5);
        assert_eq!(s.upper_bound_95, 1.5);
    }
}
