use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::OverviewView;
use tracing::instrument;

use crate::helpers::converters::{to_series, to_statistics};
use crate::helpers::range::resolve_year_range;
use crate::schemas::{ApiResponse, AppState, RangeQuery};

/// Get the overview for a commodity: the four scalar cards plus the
/// chart-ready price series inside the selected year range.
#[utoipa::path(
    get,
    path = "/api/v1/commodities/{commodity}/overview",
    tag = "views",
    params(
        ("commodity" = String, Path, description = "Commodity name"),
        ("start_year" = Option<i32>, Query, description = "First year of the selection"),
        ("end_year" = Option<i32>, Query, description = "Last year of the selection"),
    ),
    responses(
        (status = 200, description = "Overview retrieved successfully", body = ApiResponse<OverviewView>),
        (status = 400, description = "Invalid year range", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Commodity not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_commodity_overview(
    Path(commodity): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OverviewView>>, StatusCode> {
    let view = build_overview(&state, &commodity, query.start_year, query.end_year)?;

    let response = ApiResponse {
        data: view,
        message: "Overview retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Computes the overview for one selection. Shared with the view dispatch
/// endpoint. An empty selection is not an error: the statistics are all
/// zero and the series is empty.
pub(crate) fn build_overview(
    state: &AppState,
    commodity: &str,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<OverviewView, StatusCode> {
    if !state.dataset.contains_commodity(commodity) {
        return Err(StatusCode::NOT_FOUND);
    }

    let range = resolve_year_range(start_year, end_year, &state.dataset);
    if !range.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let slice = match compute::commodity_slice(
        &state.dataset,
        commodity,
        range.start_year,
        range.end_year,
    ) {
        Ok(slice) => slice,
        Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let summary = compute::summarize(&slice);

    Ok(OverviewView {
        commodity: commodity.to_string(),
        range,
        statistics: to_statistics(&summary),
        series: to_series(&slice),
    })
}
