use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::{DashboardView, ViewMode};
use tracing::instrument;

use crate::handlers::forecast::build_forecast;
use crate::handlers::overview::build_overview;
use crate::handlers::scatter::build_scatter;
use crate::schemas::{ApiResponse, AppState, ViewQuery};

/// Dispatch over the three mutually exclusive display modes.
///
/// Overview and prediction compute on the selected commodity and year
/// range; the 3D mode renders the whole tidy table and does not consult
/// the selection.
#[utoipa::path(
    get,
    path = "/api/v1/commodities/{commodity}/view",
    tag = "views",
    params(
        ("commodity" = String, Path, description = "Commodity name"),
        ("mode" = Option<ViewMode>, Query, description = "Display mode: overview, prediction or 3d"),
        ("start_year" = Option<i32>, Query, description = "First year of the selection"),
        ("end_year" = Option<i32>, Query, description = "Last year of the selection"),
    ),
    responses(
        (status = 200, description = "Dashboard view retrieved successfully", body = ApiResponse<DashboardView>),
        (status = 400, description = "Invalid year range or mode", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Commodity not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_dashboard_view(
    Path(commodity): Path<String>,
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardView>>, StatusCode> {
    let mode = query.mode.unwrap_or(ViewMode::Overview);

    let view = match mode {
        ViewMode::Overview => DashboardView::Overview {
            overview: build_overview(&state, &commodity, query.start_year, query.end_year)?,
        },
        ViewMode::Prediction => DashboardView::Prediction {
            prediction: build_forecast(&state, &commodity, query.start_year, query.end_year)?,
        },
        ViewMode::Scatter3d => DashboardView::Scatter3d {
            scatter: build_scatter(&state)?,
        },
    };

    let response = ApiResponse {
        data: view,
        message: "Dashboard view retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
