//! Monte Carlo portfolio forecasting engine
//!
//! Forecasts the distribution of future portfolio value by simulating many
//! independent daily-return paths from historical price statistics:
//! - Daily returns extracted from an aligned multi-asset close-price table
//! - Per-asset Normal sampling from each asset's historical mean/std
//! - Weighted compounding into normalized value paths starting at 1.0
//! - Terminal-distribution summary with 95% confidence-interval bounds and
//!   dollar conversion for a chosen initial investment
//!
//! # Example
//!
//! ```ignore
//! use mcforecast::{PriceTable, SimulationConfig, Weights, forecast};
//!
//! let config = SimulationConfig::new(Weights::new(vec![0.4, 0.6])?, 500, 252 * 30)?;
//! let result = forecast(&prices, &config, 42)?;
//! let range = result.summary.dollar_range(20_000.0);
//! println!("95% CI: ${} - ${}", range.lower, range.upper);
//! ```
//!
//! The engine performs no I/O: price data comes from a market-data
//! collaborator, and plotting/reporting consume the returned paths and
//! summary.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod sampler;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use config::{SimulationConfig, Weights};
pub use error::{ConfigError, DataError, ForecastError};
pub use model::{
    DollarRange, PathMatrix, PriceSeries, PriceTable, ReturnSeries, ReturnStatistics,
    SimulationResult, SummaryStatistics, daily_returns,
};
pub use sampler::NormalReturnModel;
pub use simulation::{forecast, forecast_with_cancel};
