//! Data types flowing through the engine: prices in, returns and sampled
//! paths in the middle, summary statistics out.

pub mod paths;
pub mod prices;
pub mod results;
pub mod returns;

pub use paths::PathMatrix;
pub use prices::{PriceSeries, PriceTable};
pub use results::{DollarRange, SimulationResult, SummaryStatistics};
pub use returns::{ReturnSeries, ReturnStatistics, daily_returns};
