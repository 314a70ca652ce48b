use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::overview::SeriesPoint;
use crate::YearRange;

/// One sampled point on the fitted trend line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrendPoint {
    pub year: f64,
    pub msp: f64,
}

/// The prediction payload, tagged by outcome.
///
/// `insufficient_data` is the dashboard's only explicit warning: slices
/// with fewer than three observations skip the fit entirely.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastView {
    /// A fitted trend and its one-year projection
    Forecast {
        /// Selected commodity
        commodity: String,
        /// Resolved year range of the selection
        range: YearRange,
        /// Year being projected, one past the selection
        next_year: i32,
        /// Marketing-year label of the projection, e.g. "2025-26"
        next_year_label: String,
        /// Projected price; plain linear extrapolation, not a validated
        /// forecast
        predicted_msp: f64,
        slope: f64,
        intercept: f64,
        /// Observations the fit was computed from
        actual: Vec<SeriesPoint>,
        /// Dense samples of the fitted line for rendering
        trend: Vec<TrendPoint>,
    },
    /// The selection was too small for a meaningful fit
    InsufficientData {
        commodity: String,
        range: YearRange,
        /// Human-readable warning for display
        warning: String,
        /// Observations available in the selection
        available: usize,
        /// Minimum observations for a fit
        required: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_status_tag() {
        let view = ForecastView::InsufficientData {
            commodity: "Wheat".to_string(),
            range: YearRange::new(2018, 2022),
            warning: "Not enough data for prediction.".to_string(),
            available: 2,
            required: 3,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "insufficient_data");
        assert_eq!(json["available"], 2);

        let back: ForecastView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }
}
