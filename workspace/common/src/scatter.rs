use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One observation of the 3D scatter: commodity on one axis, year on
/// another, price as height (and color/size).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScatterPoint {
    pub commodity: String,
    pub year_num: i32,
    pub msp: f64,
}

/// The full-dataset scatter payload; null prices are already dropped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
}
