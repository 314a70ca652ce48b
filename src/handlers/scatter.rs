use axum::{extract::State, http::StatusCode, response::Json};
use common::ScatterView;
use tracing::instrument;

use crate::helpers::converters::to_scatter_view;
use crate::schemas::{ApiResponse, AppState};

/// Get the whole tidy table as 3D scatter points (null prices dropped).
#[utoipa::path(
    get,
    path = "/api/v1/scatter",
    tag = "views",
    responses(
        (status = 200, description = "Scatter data retrieved successfully", body = ApiResponse<ScatterView>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_scatter(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ScatterView>>, StatusCode> {
    let view = build_scatter(&state)?;

    let response = ApiResponse {
        data: view,
        message: "Scatter data retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Extracts the scatter payload. Shared with the view dispatch endpoint.
pub(crate) fn build_scatter(state: &AppState) -> Result<ScatterView, StatusCode> {
    match compute::scatter_points(&state.dataset) {
        Ok(points) => Ok(to_scatter_view(points)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
