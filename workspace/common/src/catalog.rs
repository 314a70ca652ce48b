use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the dataset offers for the dashboard controls: the crop selector's
/// options and the year slider's bounds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CommodityCatalog {
    /// Distinct commodity names in dataset order
    pub commodities: Vec<String>,
    /// Smallest numeric year present
    pub year_min: i32,
    /// Largest numeric year present
    pub year_max: i32,
    /// Total tidy record count
    pub records: usize,
}
