//! Extraction of a single commodity's price history from the tidy frame.

use model::{MspDataset, COL_COMMODITY, COL_MSP, COL_YEAR, COL_YEAR_NUM};
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::Result;

/// One non-null observation in a filtered view slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Marketing-year label, e.g. "2020-21".
    pub year: String,
    pub year_num: i32,
    pub msp: f64,
}

/// Filters the tidy frame to one commodity and a closed year range.
///
/// Records with a null price are dropped, both bounds are inclusive, and
/// the result is stably sorted by `year_num` so first/last are positional
/// in year order. An empty result is not an error.
#[instrument(skip(dataset))]
pub fn commodity_slice(
    dataset: &MspDataset,
    commodity: &str,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<PricePoint>> {
    let df = dataset.frame();

    let mask = df.column(COL_COMMODITY)?.str()?.equal(commodity);
    let filtered = df.filter(&mask)?;

    let labels = filtered.column(COL_YEAR)?.str()?;
    let years = filtered.column(COL_YEAR_NUM)?.i32()?;
    let prices = filtered.column(COL_MSP)?.f64()?;

    let mut points = Vec::new();
    for i in 0..filtered.height() {
        let (Some(year), Some(year_num)) = (labels.get(i), years.get(i)) else {
            continue;
        };
        let Some(msp) = prices.get(i) else {
            continue;
        };
        if year_num < start_year || year_num > end_year {
            continue;
        }
        points.push(PricePoint {
            year: year.to_string(),
            year_num,
            msp,
        });
    }

    // Stable sort: reshape order breaks ties between equal years
    points.sort_by_key(|p| p.year_num);

    debug!(points = points.len(), "filtered commodity slice");
    Ok(points)
}
