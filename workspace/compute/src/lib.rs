//! View computations over the tidy MSP dataset.
//!
//! Every function here is a stateless, synchronous pass over the immutable
//! dataset: slice extraction for a (commodity, year range) selection,
//! descriptive statistics, the linear trend projection, and the full-table
//! scatter extraction.

pub mod error;
pub mod scatter;
pub mod slice;
pub mod stats;
pub mod trend;

pub use error::{ComputeError, Result};
pub use scatter::{scatter_points, ScatterPoint};
pub use slice::{commodity_slice, PricePoint};
pub use stats::{summarize, PriceSummary};
pub use trend::{fit_trend, marketing_year_label, TrendForecast, TrendPoint, MIN_POINTS};
