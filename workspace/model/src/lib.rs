//! Data layer for the MSP dashboard.
//!
//! Loads the wide MSP table (one row per commodity, one column per marketing
//! year) from CSV and reshapes it once into an immutable tidy dataset with
//! one record per commodity-year observation.

pub mod dataset;
pub mod error;
pub mod ingest;

pub use dataset::{MspDataset, MspRecord, COL_COMMODITY, COL_MSP, COL_YEAR, COL_YEAR_NUM};
pub use error::{ModelError, Result};
pub use ingest::{WideTable, COMMODITY_HEADER};
