//! Path generation and the forecast entry points
//!
//! A forecast extracts historical returns, fits the per-asset sampling model,
//! then generates `num_simulations` independent value paths and summarizes
//! the terminal distribution. Runs share no mutable state; each owns one
//! column of the output matrix, so generation parallelizes across batches of
//! runs. Every run draws from its own seeded generator derived from the
//! caller's master seed, which keeps output bit-identical across thread
//! counts and across the serial fallback.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;
#[cfg(feature = "parallel")]
use rayon::slice::ParallelSlice;
use tracing::info;

use crate::config::{SimulationConfig, Weights};
use crate::error::ForecastError;
use crate::model::paths::PathMatrix;
use crate::model::prices::PriceTable;
use crate::model::results::{SimulationResult, SummaryStatistics};
use crate::model::returns::daily_returns;
use crate::sampler::NormalReturnModel;

/// Runs per parallel work unit
const RUN_BATCH_SIZE: usize = 100;

/// Forecast the portfolio-value distribution for one request.
///
/// `seed` drives every random draw; identical inputs and seed produce a
/// bit-identical [`PathMatrix`].
pub fn forecast(
    prices: &PriceTable,
    config: &SimulationConfig,
    seed: u64,
) -> Result<SimulationResult, ForecastError> {
    let cancel = AtomicBool::new(false);
    forecast_with_cancel(prices, config, seed, &cancel)
}

/// [`forecast`] with cooperative cancellation.
///
/// The flag is checked between run batches; once set, the request fails with
/// [`ForecastError::Cancelled`] and no partial result is returned.
pub fn forecast_with_cancel(
    prices: &PriceTable,
    config: &SimulationConfig,
    seed: u64,
    cancel: &AtomicBool,
) -> Result<SimulationResult, ForecastError> {
    config.weights.check_asset_count(prices.num_assets())?;

    let series = daily_returns(prices)?;
    let model = NormalReturnModel::fit(&series)?;

    info!(
        num_assets = model.num_assets(),
        num_simulations = config.num_simulations,
        num_trading_days = config.num_trading_days,
        "starting forecast"
    );

    // One seed per run, all derived from the caller's master seed
    let mut seed_rng = SmallRng::seed_from_u64(seed);
    let run_seeds: Vec<u64> = (0..config.num_simulations)
        .map(|_| seed_rng.next_u64())
        .collect();

    let generate_batch = |chunk: &[u64]| -> Result<Vec<Vec<f64>>, ForecastError> {
        if cancel.load(Ordering::Relaxed) {
            return Err(ForecastError::Cancelled);
        }
        Ok(chunk
            .iter()
            .map(|&run_seed| {
                let mut rng = SmallRng::seed_from_u64(run_seed);
                generate_path(&model, &config.weights, config.num_trading_days, &mut rng)
            })
            .collect())
    };

    #[cfg(feature = "parallel")]
    let batches: Vec<Vec<Vec<f64>>> = run_seeds
        .par_chunks(RUN_BATCH_SIZE)
        .map(generate_batch)
        .collect::<Result<_, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let batches: Vec<Vec<Vec<f64>>> = run_seeds
        .chunks(RUN_BATCH_SIZE)
        .map(generate_batch)
        .collect::<Result<_, _>>()?;

    let paths = PathMatrix::from_columns(batches.into_iter().flatten().collect());
    let summary = SummaryStatistics::from_terminal_values(&paths.terminal_values());

    info!(
        median = summary.median,
        lower_bound_95 = summary.lower_bound_95,
        upper_bound_95 = summary.upper_bound_95,
        "forecast complete"
    );

    Ok(SimulationResult { paths, summary })
}

/// Generate one run's cumulative value path.
///
/// `value[0] = 1.0`, then each day compounds the weighted combination of the
/// sampled per-asset returns. Value is floored at zero: a sampled combined
/// loss beyond 100% wipes the portfolio out rather than going negative.
pub(crate) fn generate_path<R: Rng + ?Sized>(
    model: &NormalReturnModel,
    weights: &Weights,
    num_trading_days: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut asset_returns = vec![0.0; model.num_assets()];
    let mut values = Vec::with_capacity(num_trading_days + 1);
    let mut value = 1.0;
    values.push(value);

    for _ in 0..num_trading_days {
        model.sample_day(rng, &mut asset_returns);
        let portfolio_return: f64 = weights
            .as_slice()
            .iter()
            .zip(&asset_returns)
            .map(|(w, r)| w * r)
            .sum();
        value = (value * (1.0 + portfolio_return)).max(0.0);
        values.push(value);
    }

    values
}
