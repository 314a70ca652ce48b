//! Linear trend fit and next-year projection for one commodity's slice.

use linreg::linear_regression;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::slice::PricePoint;

/// Minimum number of observations for a meaningful fit; below this the
/// line is undefined or a perfect interpolation.
pub const MIN_POINTS: usize = 3;

/// Number of samples in the dense trend line returned for rendering.
const TREND_LINE_SAMPLES: usize = 100;

/// One sampled point on the fitted line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub year: f64,
    pub msp: f64,
}

/// An ordinary-least-squares projection of the next marketing year.
///
/// Plain linear extrapolation with no confidence interval; callers must
/// not present it as a validated forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendForecast {
    /// One past the largest year in the slice.
    pub next_year: i32,
    pub predicted_msp: f64,
    pub slope: f64,
    pub intercept: f64,
    /// Dense evaluation of the fitted line from the smallest year in the
    /// slice to `next_year`, inclusive.
    pub line: Vec<TrendPoint>,
}

/// Fits `msp ~ slope * year_num + intercept` over all points of the slice,
/// equally weighted, and projects one year past the slice.
///
/// Slices with fewer than [`MIN_POINTS`] observations return
/// [`ComputeError::NotEnoughData`]; callers surface that as a warning
/// instead of attempting a fit.
#[instrument(skip(points), fields(num_points = points.len()))]
pub fn fit_trend(points: &[PricePoint]) -> Result<TrendForecast> {
    if points.len() < MIN_POINTS {
        return Err(ComputeError::NotEnoughData {
            available: points.len(),
            required: MIN_POINTS,
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| f64::from(p.year_num)).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.msp).collect();

    let (slope, intercept) = linear_regression::<f64, f64, f64>(&xs, &ys)
        .map_err(|err| ComputeError::Regression(format!("{:?}", err)))?;

    let mut min_year = points[0].year_num;
    let mut max_year = points[0].year_num;
    for p in points {
        min_year = min_year.min(p.year_num);
        max_year = max_year.max(p.year_num);
    }

    let next_year = max_year + 1;
    let predicted_msp = slope * f64::from(next_year) + intercept;

    let start = f64::from(min_year);
    let end = f64::from(next_year);
    let step = (end - start) / (TREND_LINE_SAMPLES - 1) as f64;
    let line = (0..TREND_LINE_SAMPLES)
        .map(|i| {
            let year = start + step * i as f64;
            TrendPoint {
                year,
                msp: slope * year + intercept,
            }
        })
        .collect();

    debug!(next_year, predicted_msp, slope, "fitted price trend");

    Ok(TrendForecast {
        next_year,
        predicted_msp,
        slope,
        intercept,
        line,
    })
}

/// Formats a numeric year as its marketing-year label, e.g. `2025` into
/// `"2025-26"`.
pub fn marketing_year_label(year: i32) -> String {
    format!("{}-{:02}", year, (year + 1) % 100)
}
