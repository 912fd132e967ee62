//! Per-asset daily-return sampling
//!
//! Each asset's future daily return is drawn i.i.d. from a Normal
//! distribution fit to its own historical mean and standard deviation. This
//! is a parametric model, not a bootstrap of observed returns; cross-asset
//! correlation is not modeled beyond what the caller's weighting implies.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::error::ForecastError;
use crate::model::returns::{ReturnSeries, ReturnStatistics};

/// Fitted return distributions for all assets, in price-table order
#[derive(Debug, Clone)]
pub struct NormalReturnModel {
    symbols: Vec<String>,
    statistics: Vec<ReturnStatistics>,
    normals: Vec<Normal<f64>>,
}

impl NormalReturnModel {
    /// Fit one Normal per asset from its historical return series.
    ///
    /// A zero standard deviation is valid and yields constant draws.
    pub fn fit(series: &[ReturnSeries]) -> Result<Self, ForecastError> {
        let mut symbols = Vec::with_capacity(series.len());
        let mut statistics = Vec::with_capacity(series.len());
        let mut normals = Vec::with_capacity(series.len());

        for s in series {
            let stats = ReturnStatistics::from_returns(&s.returns);
            let normal = Normal::new(stats.mean, stats.std_dev).map_err(|_| {
                ForecastError::InvalidDistribution {
                    symbol: s.symbol.clone(),
                    mean: stats.mean,
                    std_dev: stats.std_dev,
                }
            })?;
            debug!(
                symbol = %s.symbol,
                mean = stats.mean,
                std_dev = stats.std_dev,
                "fitted daily return distribution"
            );
            symbols.push(s.symbol.clone());
            statistics.push(stats);
            normals.push(normal);
        }

        Ok(Self {
            symbols,
            statistics,
            normals,
        })
    }

    #[must_use]
    pub fn num_assets(&self) -> usize {
        self.normals.len()
    }

    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Fitted statistics per asset, in table order
    #[must_use]
    pub fn statistics(&self) -> &[ReturnStatistics] {
        &self.statistics
    }

    /// Draw one day's return for every asset into `out`.
    ///
    /// `out.len()` must equal `num_assets()`. The generator is injected so
    /// callers control seeding and reproducibility.
    pub fn sample_day<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        debug_assert_eq!(out.len(), self.normals.len());
        for (slot, normal) in out.iter_mut().zip(&self.normals) {
            *slot = normal.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn series(symbol: &str, returns: Vec<f64>) -> ReturnSeries {
        ReturnSeries {
            symbol: symbol.to_string(),
            returns,
        }
    }

    #[test]
    fn test_zero_variance_samples_are_constant() {
        let model =
            NormalReturnModel::fit(&[series("FIXED", vec![0.01, 0.01, 0.01, 0.01])]).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut out = [0.0];
        for _ in 0..100 {
            model.sample_day(&mut rng, &mut out);
            assert!((out[0] - 0.01).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_day_fills_one_value_per_asset() {
        let model = NormalReturnModel::fit(&[
            series("AGG", vec![0.001, -0.002, 0.0015]),
            series("SPY", vec![0.01, -0.02, 0.015]),
        ])
        .unwrap();
        assert_eq!(model.num_assets(), 2);

        let mut rng = SmallRng::seed_from_u64(42);
        let mut out = [0.0; 2];
        model.sample_day(&mut rng, &mut out);
        assert!(out.iter().all(|r| r.is_finite()));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let model = NormalReturnModel::fit(&[series("SPY", vec![0.01, -0.02, 0.015])]).unwrap();

        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        let (mut out_a, mut out_b) = ([0.0], [0.0]);
        for _ in 0..50 {
            model.sample_day(&mut a, &mut out_a);
            model.sample_day(&mut b, &mut out_b);
            assert_eq!(out_a[0].to_bits(), out_b[0].to_bits());
        }
    }

    #[test]
    fn test_sample_mean_tracks_historical_mean() {
        let model = NormalReturnModel::fit(&[series("SPY", vec![0.02, 0.0, 0.04, -0.02])]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut out = [0.0];
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            model.sample_day(&mut rng, &mut out);
            sum += out[0];
        }
        // Historical mean is 0.01; std is ~0.026, so the sample mean of 20k
        // draws should land well within 3 standard errors.
        assert!((sum / n as f64 - 0.01).abs() < 0.001);
    }
}
