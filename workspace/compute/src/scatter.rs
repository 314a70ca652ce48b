//! Full-table extraction for the 3D scatter view.

use model::{MspDataset, COL_COMMODITY, COL_MSP, COL_YEAR_NUM};
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::Result;

/// One (commodity, year, price) observation of the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub commodity: String,
    pub year_num: i32,
    pub msp: f64,
}

/// Extracts every non-null observation across all commodities and years.
///
/// No further computation happens here; the scatter renders the tidy table
/// as-is, colored and sized by price.
#[instrument(skip(dataset))]
pub fn scatter_points(dataset: &MspDataset) -> Result<Vec<ScatterPoint>> {
    let df = dataset.frame();

    let names = df.column(COL_COMMODITY)?.str()?;
    let years = df.column(COL_YEAR_NUM)?.i32()?;
    let prices = df.column(COL_MSP)?.f64()?;

    let mut points = Vec::new();
    for i in 0..df.height() {
        let (Some(commodity), Some(year_num)) = (names.get(i), years.get(i)) else {
            continue;
        };
        let Some(msp) = prices.get(i) else {
            continue;
        };
        points.push(ScatterPoint {
            commodity: commodity.to_string(),
            year_num,
            msp,
        });
    }

    debug!(points = points.len(), "extracted scatter points");
    Ok(points)
}
