//! Historical return extraction
//!
//! Converts close prices into simple daily returns and fits the per-asset
//! sample statistics the sampler draws from.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::model::prices::PriceTable;

/// One asset's historical daily returns, in table order.
///
/// One element shorter than the price series: the first date has no return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub symbol: String,
    pub returns: Vec<f64>,
}

/// Sample mean and standard deviation of a return series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl ReturnStatistics {
    /// Fit sample statistics (ddof = 1) to a return series.
    #[must_use]
    pub fn from_returns(returns: &[f64]) -> Self {
        let n = returns.len();
        let mean = returns.iter().sum::<f64>() / n as f64;
        let std_dev = if n > 1 {
            let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        Self { mean, std_dev }
    }
}

/// Extract simple daily returns (`p[t] / p[t-1] - 1`) for every asset.
///
/// Fails if any series has fewer than 2 observations or contains a price
/// that is non-positive, NaN, or infinite.
pub fn daily_returns(prices: &PriceTable) -> Result<Vec<ReturnSeries>, DataError> {
    prices
        .series()
        .iter()
        .map(|s| {
            if s.closes.len() < 2 {
                return Err(DataError::InsufficientHistory {
                    symbol: s.symbol.clone(),
                    observations: s.closes.len(),
                });
            }
            for (i, &p) in s.closes.iter().enumerate() {
                if !p.is_finite() {
                    return Err(DataError::NonFinitePrice {
                        symbol: s.symbol.clone(),
                        index: i,
                    });
                }
                if p <= 0.0 {
                    return Err(DataError::NonPositivePrice {
                        symbol: s.symbol.clone(),
                        index: i,
                        price: p,
                    });
                }
            }
            let returns = s.closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
            Ok(ReturnSeries {
                symbol: s.symbol.clone(),
                returns,
            })
        })
        .collect()
}
