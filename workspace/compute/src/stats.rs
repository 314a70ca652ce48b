//! Descriptive statistics over a filtered view slice.

use tracing::instrument;

use crate::slice::PricePoint;

/// The four scalar cards of the overview: latest/first/average price and
/// percentage growth across the slice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceSummary {
    pub latest_price: f64,
    pub first_price: f64,
    pub average_price: f64,
    pub growth_pct: f64,
}

/// Summarizes a slice ordered ascending by year.
///
/// Latest and first are positional (last and first record in year order),
/// not extremal values. Growth is guarded against a non-positive first
/// price. An empty slice yields all zeros so the overview always renders
/// its four cards.
#[instrument(skip(points), fields(num_points = points.len()))]
pub fn summarize(points: &[PricePoint]) -> PriceSummary {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return PriceSummary::default();
    };

    let average_price = points.iter().map(|p| p.msp).sum::<f64>() / points.len() as f64;
    let growth_pct = if first.msp > 0.0 {
        (last.msp - first.msp) / first.msp * 100.0
    } else {
        0.0
    };

    PriceSummary {
        latest_price: last.msp,
        first_price: first.msp,
        average_price,
        growth_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year_num: i32, msp: f64) -> PricePoint {
        PricePoint {
            year: format!("{}-{:02}", year_num, (year_num + 1) % 100),
            year_num,
            msp,
        }
    }

    #[test]
    fn test_empty_slice_yields_all_zeros() {
        let summary = summarize(&[]);

        assert_eq!(summary.latest_price, 0.0);
        assert_eq!(summary.first_price, 0.0);
        assert_eq!(summary.average_price, 0.0);
        assert_eq!(summary.growth_pct, 0.0);
    }

    #[test]
    fn test_single_point_slice() {
        let summary = summarize(&[point(2020, 1868.0)]);

        assert_eq!(summary.latest_price, 1868.0);
        assert_eq!(summary.first_price, 1868.0);
        assert_eq!(summary.average_price, 1868.0);
        assert_eq!(summary.growth_pct, 0.0);
    }

    #[test]
    fn test_latest_and_first_are_positional_not_extremal() {
        // Prices dip below the first and above the last mid-slice
        let slice = [
            point(2018, 1500.0),
            point(2019, 1200.0),
            point(2020, 2100.0),
            point(2021, 1800.0),
        ];
        let summary = summarize(&slice);

        assert_eq!(summary.first_price, 1500.0);
        assert_eq!(summary.latest_price, 1800.0);
        assert_eq!(summary.average_price, 1650.0);
        assert!((summary.growth_pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_is_guarded_against_zero_first_price() {
        let slice = [point(2018, 0.0), point(2019, 500.0)];
        let summary = summarize(&slice);

        assert_eq!(summary.growth_pct, 0.0);
        assert_eq!(summary.latest_price, 500.0);
    }

    #[test]
    fn test_negative_growth() {
        let slice = [point(2018, 2000.0), point(2019, 1500.0)];
        let summary = summarize(&slice);

        assert!((summary.growth_pct - -25.0).abs() < 1e-9);
    }
}
