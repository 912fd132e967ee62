//! Historical close-price input
//!
//! A [`PriceTable`] is the engine's only external input: one close-price
//! series per asset, all aligned to a shared ordered sequence of trading
//! dates. It is supplied by a market-data collaborator and read-only here.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One asset's close-price history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            closes,
        }
    }
}

/// Time-aligned close prices for all requested assets
#[derive(Debug, Clone, Serialize)]
pub struct PriceTable {
    dates: Vec<Date>,
    series: Vec<PriceSeries>,
    #[serde(skip)]
    symbol_index: FxHashMap<String, usize>,
}

impl PriceTable {
    /// Build a table, validating alignment against the date axis.
    ///
    /// Price *values* are validated later, during return extraction, so the
    /// error can name the exact offending observation.
    pub fn new(dates: Vec<Date>, series: Vec<PriceSeries>) -> Result<Self, DataError> {
        if series.is_empty() {
            return Err(DataError::EmptyTable);
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DataError::DatesNotIncreasing);
        }

        let mut symbol_index = FxHashMap::default();
        for (i, s) in series.iter().enumerate() {
            if s.closes.len() != dates.len() {
                return Err(DataError::SeriesLengthMismatch {
                    symbol: s.symbol.clone(),
                    expected: dates.len(),
                    got: s.closes.len(),
                });
            }
            if symbol_index.insert(s.symbol.clone(), i).is_some() {
                return Err(DataError::DuplicateSymbol {
                    symbol: s.symbol.clone(),
                });
            }
        }

        Ok(Self {
            dates,
            series,
            symbol_index,
        })
    }

    /// Number of assets in the table
    #[must_use]
    pub fn num_assets(&self) -> usize {
        self.series.len()
    }

    /// Number of aligned trading dates
    #[must_use]
    pub fn num_dates(&self) -> usize {
        self.dates.len()
    }

    /// The shared trading-date axis
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Asset series in table order
    #[must_use]
    pub fn series(&self) -> &[PriceSeries] {
        &self.series
    }

    /// Look up a series by symbol
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&PriceSeries> {
        self.symbol_index.get(symbol).map(|&i| &self.series[i])
    }

    /// Asset symbols in table order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.symbol.as_str())
    }
}
