//! Engine-level tests
//!
//! Leaf types carry their own inline tests; these modules exercise the full
//! forecast pipeline and the end-to-end retirement scenarios.

use jiff::civil::date;

use crate::model::prices::{PriceSeries, PriceTable};


/// Deterministic five-year-style two-asset history: a low-volatility bond
/// proxy and a higher-volatility equity proxy.
pub(crate) fn synthetic_history(num_days: usize) -> PriceTable {
    let start = date(2015, 8, 7);
    let dates = (0..num_days)
        .map(|i| start.saturating_add(jiff::Span::new().days(i as i64)))
        .collect();

    let mut agg = Vec::with_capacity(num_days);
    let mut spy = Vec::with_capacity(num_days);
    let (mut a, mut s) = (100.0_f64, 200.0_f64);
    for i in 0..num_days {
        let t = i as f64;
        a *= 1.0 + 0.0001 + 0.002 * (t * 0.7).sin();
        s *= 1.0 + 0.0004 + 0.010 * (t * 1.3).sin();
        agg.push(a);
        spy.push(s);
    }

    PriceTable::new(
        dates,
        vec![PriceSeries::new("AGG", agg), PriceSeries::new("SPY", spy)],
    )
    .unwrap()
}

/// History where each asset grows at an exact constant daily rate, so every
/// sampled return equals that rate and paths are analytically known.
pub(crate) fn constant_rate_history(rate_a: f64, rate_b: f64, num_days: usize) -> PriceTable {
    let start = date(2020, 1, 1);
    let dates = (0..num_days)
        .map(|i| start.saturating_add(jiff::Span::new().days(i as i64)))
        .collect();

    let a = (0..num_days)
        .map(|i| 100.0 * (1.0 + rate_a).powi(i as i32))
        .collect();
    let b = (0..num_days)
        .map(|i| 100.0 * (1.0 + rate_b).powi(i as i32))
        .collect();

    PriceTable::new(
        dates,
        vec![PriceSeries::new("A", a), PriceSeries::new("B", b)],
    )
    .unwrap()
}
