//! Wide-to-tidy reshaping and the immutable in-memory dataset.
//!
//! The reshape unpivots the wide table into one record per
//! (commodity, year-column) pair: row order first, then column order within
//! each row. Year labels are cleaned (`KMS ` prefix stripped, whitespace
//! trimmed) and columns whose label does not start with four digits produce
//! no records. Prices coerce to null on parse failure, never to an error.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info, instrument};

use crate::error::{ModelError, Result};
use crate::ingest::WideTable;

/// Column name of the commodity identifier in the tidy frame.
pub const COL_COMMODITY: &str = "commodity";
/// Column name of the marketing-year label (e.g. "2020-21").
pub const COL_YEAR: &str = "year";
/// Column name of the numeric year derived from the label.
pub const COL_YEAR_NUM: &str = "year_num";
/// Column name of the (nullable) price.
pub const COL_MSP: &str = "msp";

/// Season prefix stripped from year-column headers.
const YEAR_LABEL_PREFIX: &str = "KMS ";

/// One tidy observation: a commodity's declared price for one marketing year.
#[derive(Debug, Clone, PartialEq)]
pub struct MspRecord {
    pub commodity: String,
    /// Marketing-year label, e.g. "2020-21".
    pub year: String,
    /// Numeric year parsed from the first four characters of the label.
    pub year_num: i32,
    /// Declared price; null when the source cell was missing or non-numeric.
    pub msp: Option<f64>,
}

/// Cleans a year-column header into a (label, numeric year) pair.
///
/// Returns `None` for headers whose cleaned label does not start with
/// exactly four ASCII digits; those columns are dropped from the tidy table.
pub fn clean_year_label(raw: &str) -> Option<(String, i32)> {
    let label = raw.trim();
    let label = label.strip_prefix(YEAR_LABEL_PREFIX).unwrap_or(label).trim();

    let head: String = label.chars().take(4).collect();
    if head.len() != 4 || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = head.parse::<i32>().ok()?;

    Some((label.to_string(), year))
}

/// Coerces a price cell to a float, treating failures as missing.
fn parse_price(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Unpivots the wide table into the tidy frame.
///
/// One record is emitted per (row, surviving year column) pair, preserving
/// original row order and original column order within each row. Records
/// are never merged or deduplicated.
#[instrument(skip(table), fields(rows = table.rows().len()))]
pub fn reshape(table: &WideTable) -> Result<DataFrame> {
    // Year columns that survive label cleaning, in header order
    let year_columns: Vec<(usize, String, i32)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != table.commodity_idx())
        .filter_map(|(idx, header)| clean_year_label(header).map(|(label, year)| (idx, label, year)))
        .collect();

    debug!(
        year_columns = year_columns.len(),
        dropped = table.headers().len() - 1 - year_columns.len(),
        "cleaned year-column headers"
    );

    let mut commodities = Vec::new();
    let mut labels = Vec::new();
    let mut years = Vec::new();
    let mut prices: Vec<Option<f64>> = Vec::new();

    for row in table.rows() {
        let commodity = row
            .get(table.commodity_idx())
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default();

        for (idx, label, year) in &year_columns {
            commodities.push(commodity.clone());
            labels.push(label.clone());
            years.push(*year);
            prices.push(row.get(*idx).and_then(|cell| parse_price(cell)));
        }
    }

    let df = DataFrame::new(vec![
        Series::new(COL_COMMODITY.into(), commodities).into(),
        Series::new(COL_YEAR.into(), labels).into(),
        Series::new(COL_YEAR_NUM.into(), years).into(),
        Series::new(COL_MSP.into(), prices).into(),
    ])?;

    Ok(df)
}

/// The loaded dataset: the tidy frame plus metadata derived once at startup.
///
/// Immutable after construction; views borrow it read-only on every
/// interaction.
#[derive(Debug, Clone)]
pub struct MspDataset {
    df: DataFrame,
    commodities: Vec<String>,
    year_min: i32,
    year_max: i32,
}

impl MspDataset {
    /// Loads and reshapes the dataset from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_wide(&WideTable::from_path(path)?)
    }

    /// Loads and reshapes the dataset from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_wide(&WideTable::from_reader(reader)?)
    }

    /// Reshapes a wide table and derives the commodity catalog and year
    /// bounds. A table that reshapes to zero records is rejected.
    pub fn from_wide(table: &WideTable) -> Result<Self> {
        let df = reshape(table)?;
        if df.height() == 0 {
            return Err(ModelError::EmptyDataset);
        }

        // Distinct commodities in first-appearance order; unnamed rows are
        // kept as records but excluded from the catalog.
        let names = df.column(COL_COMMODITY)?.str()?;
        let mut seen = HashSet::new();
        let mut commodities = Vec::new();
        for i in 0..names.len() {
            if let Some(name) = names.get(i) {
                if !name.is_empty() && seen.insert(name.to_string()) {
                    commodities.push(name.to_string());
                }
            }
        }

        let years = df.column(COL_YEAR_NUM)?.i32()?;
        let (Some(year_min), Some(year_max)) = (years.min(), years.max()) else {
            return Err(ModelError::EmptyDataset);
        };

        info!(
            records = df.height(),
            commodities = commodities.len(),
            year_min,
            year_max,
            "MSP dataset loaded"
        );

        Ok(Self {
            df,
            commodities,
            year_min,
            year_max,
        })
    }

    /// The tidy frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Distinct commodity names in first-appearance order.
    pub fn commodities(&self) -> &[String] {
        &self.commodities
    }

    /// Whether the catalog contains the given commodity (exact match).
    pub fn contains_commodity(&self, name: &str) -> bool {
        self.commodities.iter().any(|c| c == name)
    }

    /// Smallest numeric year in the tidy table.
    pub fn year_min(&self) -> i32 {
        self.year_min
    }

    /// Largest numeric year in the tidy table.
    pub fn year_max(&self) -> i32 {
        self.year_max
    }

    /// Number of tidy records.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Extracts the tidy frame as typed records, in frame order.
    pub fn records(&self) -> Result<Vec<MspRecord>> {
        let names = self.df.column(COL_COMMODITY)?.str()?;
        let labels = self.df.column(COL_YEAR)?.str()?;
        let years = self.df.column(COL_YEAR_NUM)?.i32()?;
        let prices = self.df.column(COL_MSP)?.f64()?;

        let mut records = Vec::with_capacity(self.df.height());
        for i in 0..self.df.height() {
            let (Some(commodity), Some(year), Some(year_num)) =
                (names.get(i), labels.get(i), years.get(i))
            else {
                continue;
            };
            records.push(MspRecord {
                commodity: commodity.to_string(),
                year: year.to_string(),
                year_num,
                msp: prices.get(i),
            });
        }

        Ok(records)
    }
}
