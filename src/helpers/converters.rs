//! Conversion helpers bridging the compute module's plain structs into the
//! transport-friendly wrapper structures in the common module.

use common::{
    ForecastView, PriceStatistics, ScatterPoint, ScatterView, SeriesPoint, TrendPoint, YearRange,
};
use compute::{marketing_year_label, PricePoint, PriceSummary, TrendForecast};

/// Converts a filtered slice into chart-ready series points.
pub fn to_series(points: &[PricePoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|p| SeriesPoint {
            year: p.year.clone(),
            year_num: p.year_num,
            msp: p.msp,
        })
        .collect()
}

/// Converts a computed summary into the scalar-cards payload.
pub fn to_statistics(summary: &PriceSummary) -> PriceStatistics {
    PriceStatistics {
        latest_price: summary.latest_price,
        first_price: summary.first_price,
        average_price: summary.average_price,
        growth_pct: summary.growth_pct,
    }
}

/// Assembles the successful forecast payload: the projection itself, the
/// observations it was fitted on, and the dense trend line.
pub fn to_forecast_view(
    commodity: &str,
    range: YearRange,
    points: &[PricePoint],
    forecast: &TrendForecast,
) -> ForecastView {
    ForecastView::Forecast {
        commodity: commodity.to_string(),
        range,
        next_year: forecast.next_year,
        next_year_label: marketing_year_label(forecast.next_year),
        predicted_msp: forecast.predicted_msp,
        slope: forecast.slope,
        intercept: forecast.intercept,
        actual: to_series(points),
        trend: forecast
            .line
            .iter()
            .map(|p| TrendPoint {
                year: p.year,
                msp: p.msp,
            })
            .collect(),
    }
}

/// Converts computed scatter points into the 3D scatter payload.
pub fn to_scatter_view(points: Vec<compute::ScatterPoint>) -> ScatterView {
    ScatterView {
        points: points
            .into_iter()
            .map(|p| ScatterPoint {
                commodity: p.commodity,
                year_num: p.year_num,
                msp: p.msp,
            })
            .collect(),
    }
}
