//! Common transport-layer types for the MSP dashboard API.
//! These structs mirror the backend handlers' response payloads so any
//! client can deserialize API responses without duplicating shapes.

mod catalog;
mod forecast;
mod overview;
mod scatter;
mod views;

pub use catalog::CommodityCatalog;
pub use forecast::{ForecastView, TrendPoint};
pub use overview::{OverviewView, PriceStatistics, SeriesPoint};
pub use scatter::{ScatterPoint, ScatterView};
pub use views::{DashboardView, ViewMode};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A closed range of numeric marketing years; both ends inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct YearRange {
    /// First year of the selection, e.g. 2018
    pub start_year: i32,
    /// Last year of the selection, e.g. 2022
    pub end_year: i32,
}

impl YearRange {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    /// Whether the range is ordered (`start <= end`).
    pub fn is_valid(&self) -> bool {
        self.start_year <= self.end_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_validity() {
        assert!(YearRange::new(2018, 2022).is_valid());
        assert!(YearRange::new(2020, 2020).is_valid());
        assert!(!YearRange::new(2022, 2018).is_valid());
    }
}
