//! Forecast request configuration
//!
//! A [`SimulationConfig`] is built fresh per forecasting request and never
//! mutated afterward; comparing horizons or allocations means constructing a
//! new config per scenario, not reconfiguring a shared one.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance for the weights-sum-to-one check
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fixed allocation fractions, one per asset in price-table order.
///
/// Validated at construction: every weight non-negative, sum within
/// `1e-6` of 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(weights: Vec<f64>) -> Result<Self, ConfigError> {
        for (index, &weight) in weights.iter().enumerate() {
            if weight.is_nan() || weight < 0.0 {
                return Err(ConfigError::NegativeWeight { index, weight });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSumInvalid { sum });
        }
        Ok(Self(weights))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Check the one-weight-per-asset contract against a price table.
    pub(crate) fn check_asset_count(&self, num_assets: usize) -> Result<(), ConfigError> {
        if self.0.len() != num_assets {
            return Err(ConfigError::WeightCountMismatch {
                expected: num_assets,
                got: self.0.len(),
            });
        }
        Ok(())
    }
}

/// Immutable parameters for one forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub weights: Weights,
    pub num_simulations: usize,
    pub num_trading_days: usize,
}

impl SimulationConfig {
    pub fn new(
        weights: Weights,
        num_simulations: usize,
        num_trading_days: usize,
    ) -> Result<Self, ConfigError> {
        if num_simulations == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        if num_trading_days == 0 {
            return Err(ConfigError::ZeroTradingDays);
        }
        Ok(Self {
            weights,
            num_simulations,
            num_trading_days,
        })
    }
}
