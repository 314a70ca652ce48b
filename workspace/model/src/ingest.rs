//! CSV ingest of the wide MSP table.
//!
//! The source file has a header row with one identifier column named
//! `Commodities` followed by marketing-year columns (`KMS <YYYY>-<YY>`).
//! Header cells may contain embedded line breaks; they are normalized to
//! spaces here so downstream label cleaning only deals with flat strings.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{ModelError, Result};

/// Header of the identifier column in the source file.
pub const COMMODITY_HEADER: &str = "Commodities";

/// The raw wide table: one row per commodity, one column per year.
#[derive(Debug, Clone)]
pub struct WideTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    commodity_idx: usize,
}

impl WideTable {
    /// Reads the wide table from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads the wide table from any CSV source.
    ///
    /// Rows may be ragged; short rows simply have no value for the trailing
    /// columns. The identifier column must exist (after header
    /// normalization) or ingest fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        // Normalize embedded line breaks in headers to spaces
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.replace('\n', " "))
            .collect();

        let commodity_idx = headers
            .iter()
            .position(|h| h.trim() == COMMODITY_HEADER)
            .ok_or_else(|| ModelError::MissingIdentifierColumn(COMMODITY_HEADER.to_string()))?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        debug!(
            columns = headers.len(),
            rows = rows.len(),
            "loaded wide MSP table"
        );

        Ok(Self {
            headers,
            rows,
            commodity_idx,
        })
    }

    /// Normalized column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the identifier column.
    pub fn commodity_idx(&self) -> usize {
        self.commodity_idx
    }
}
