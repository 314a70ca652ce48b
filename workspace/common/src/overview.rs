use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::YearRange;

/// One chart-ready observation of a commodity's price history. Feeds both
/// the trend line chart and the year-wise bar chart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeriesPoint {
    /// Marketing-year label, e.g. "2020-21"
    pub year: String,
    /// Numeric year for ordering
    pub year_num: i32,
    /// Declared price
    pub msp: f64,
}

/// The four scalar cards of the overview.
///
/// All zeros when the selection matched no records; an empty `series` on
/// the enclosing view is the machine-readable no-data signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PriceStatistics {
    /// Price of the last record in year order
    pub latest_price: f64,
    /// Price of the first record in year order
    pub first_price: f64,
    /// Arithmetic mean over the selection
    pub average_price: f64,
    /// Growth from first to latest, in percent
    pub growth_pct: f64,
}

/// The overview payload: scalar cards plus the filtered series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OverviewView {
    /// Selected commodity
    pub commodity: String,
    /// Resolved year range of the selection
    pub range: YearRange,
    pub statistics: PriceStatistics,
    /// Observations inside the selection, ascending by year
    pub series: Vec<SeriesPoint>,
}
