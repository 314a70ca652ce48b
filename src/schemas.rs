use std::sync::Arc;

use common::{
    CommodityCatalog, DashboardView, ForecastView, OverviewView, PriceStatistics, ScatterPoint,
    ScatterView, SeriesPoint, TrendPoint, ViewMode, YearRange,
};
use model::MspDataset;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The tidy dataset, reshaped once at startup and immutable thereafter
    pub dataset: Arc<MspDataset>,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of tidy records loaded
    pub records: usize,
}

/// Query parameters selecting a year range
#[derive(Debug, Deserialize, ToSchema)]
pub struct RangeQuery {
    /// First year of the selection (defaults to the dataset minimum)
    pub start_year: Option<i32>,
    /// Last year of the selection (defaults to the dataset maximum)
    pub end_year: Option<i32>,
}

/// Query parameters of the view dispatch endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewQuery {
    /// Display mode (defaults to overview)
    pub mode: Option<ViewMode>,
    /// First year of the selection (defaults to the dataset minimum)
    pub start_year: Option<i32>,
    /// Last year of the selection (defaults to the dataset maximum)
    pub end_year: Option<i32>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::commodities::get_commodities,
        crate::handlers::overview::get_commodity_overview,
        crate::handlers::forecast::get_commodity_forecast,
        crate::handlers::scatter::get_scatter,
        crate::handlers::views::get_dashboard_view,
    ),
    components(schemas(
        ApiResponse<CommodityCatalog>,
        ApiResponse<OverviewView>,
        ApiResponse<ForecastView>,
        ApiResponse<ScatterView>,
        ApiResponse<DashboardView>,
        ErrorResponse,
        HealthResponse,
        CommodityCatalog,
        OverviewView,
        PriceStatistics,
        SeriesPoint,
        ForecastView,
        TrendPoint,
        ScatterView,
        ScatterPoint,
        DashboardView,
        ViewMode,
        YearRange,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "catalog", description = "Dataset catalog for the dashboard controls"),
        (name = "views", description = "Dashboard view computations")
    )
)]
pub struct ApiDoc;
