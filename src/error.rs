use thiserror::Error;

/// Errors from validating forecast configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("expected {expected} weights (one per asset), got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("weights sum to {sum}, must sum to 1.0")]
    WeightSumInvalid { sum: f64 },

    #[error("weight at index {index} is {weight}, weights must be non-negative")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("num_simulations must be positive")]
    ZeroSimulations,

    #[error("num_trading_days must be positive")]
    ZeroTradingDays,
}

/// Errors from validating historical price input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("price table contains no assets")]
    EmptyTable,

    #[error("duplicate asset symbol {symbol:?}")]
    DuplicateSymbol { symbol: String },

    #[error("series for {symbol:?} has {got} prices, date axis has {expected}")]
    SeriesLengthMismatch {
        symbol: String,
        expected: usize,
        got: usize,
    },

    #[error("trading dates must be strictly increasing")]
    DatesNotIncreasing,

    #[error("{symbol:?} has {observations} observations, need at least 2 to compute returns")]
    InsufficientHistory { symbol: String, observations: usize },

    #[error("{symbol:?} has non-positive price {price} at index {index}")]
    NonPositivePrice {
        symbol: String,
        index: usize,
        price: f64,
    },

    #[error("{symbol:?} has a missing or non-finite price at index {index}")]
    NonFinitePrice { symbol: String, index: usize },
}

/// Top-level error for a forecast request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("cannot build return distribution for {symbol:?} (mean={mean}, std_dev={std_dev})")]
    InvalidDistribution {
        symbol: String,
        mean: f64,
        std_dev: f64,
    },

    /// Forecast was cancelled by caller request
    #[error("forecast cancelled")]
    Cancelled,
}
