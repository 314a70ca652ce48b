use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::ForecastView;
use compute::ComputeError;
use tracing::instrument;

use crate::helpers::converters::to_forecast_view;
use crate::helpers::range::resolve_year_range;
use crate::schemas::{ApiResponse, AppState, RangeQuery};

/// Get the next-year trend projection for a commodity.
///
/// Selections with fewer than three priced observations return the
/// `insufficient_data` payload instead of a fit.
#[utoipa::path(
    get,
    path = "/api/v1/commodities/{commodity}/forecast",
    tag = "views",
    params(
        ("commodity" = String, Path, description = "Commodity name"),
        ("start_year" = Option<i32>, Query, description = "First year of the selection"),
        ("end_year" = Option<i32>, Query, description = "Last year of the selection"),
    ),
    responses(
        (status = 200, description = "Forecast retrieved successfully", body = ApiResponse<ForecastView>),
        (status = 400, description = "Invalid year range", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Commodity not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_commodity_forecast(
    Path(commodity): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastView>>, StatusCode> {
    let view = build_forecast(&state, &commodity, query.start_year, query.end_year)?;

    let response = ApiResponse {
        data: view,
        message: "Forecast retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Computes the forecast for one selection. Shared with the view dispatch
/// endpoint.
pub(crate) fn build_forecast(
    state: &AppState,
    commodity: &str,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> Result<ForecastView, StatusCode> {
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

    match compute::fit_trend(&slice) {
        Ok(forecast) => Ok(to_forecast_view(commodity, range, &slice, &forecast)),
        Err(ComputeError::NotEnoughData {
            available,
            required,
        }) => Ok(ForecastView::InsufficientData {
            commodity: commodity.to_string(),
            range,
            warning: "Not enough data for prediction.".to_string(),
            available,
            required,
        }),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
