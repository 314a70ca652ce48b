use axum::{extract::State, http::StatusCode, response::Json};
use common::CommodityCatalog;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the dataset catalog that drives the dashboard controls: the crop
/// selector options and the year slider bounds.
#[utoipa::path(
    get,
    path = "/api/v1/commodities",
    tag = "catalog",
    responses(
        (status = 200, description = "Commodity catalog retrieved successfully", body = ApiResponse<CommodityCatalog>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_commodities(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CommodityCatalog>>, StatusCode> {
    let catalog = CommodityCatalog {
        commodities: state.dataset.commodities().to_vec(),
        year_min: state.dataset.year_min(),
        year_max: state.dataset.year_max(),
        records: state.dataset.len(),
    };

    let response = ApiResponse {
        data: catalog,
        message: "Commodity catalog retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
