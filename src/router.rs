use crate::handlers::{
    commodities::get_commodities, forecast::get_commodity_forecast, health::health_check,
    overview::get_commodity_overview, scatter::get_scatter, views::get_dashboard_view,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dataset catalog for the dashboard controls
        .route("/api/v1/commodities", get(get_commodities))
        // Per-commodity views
        .route(
            "/api/v1/commodities/:commodity/overview",
            get(get_commodity_overview),
        )
        .route(
            "/api/v1/commodities/:commodity/forecast",
            get(get_commodity_forecast),
        )
        // Mode dispatch over the three views
        .route(
            "/api/v1/commodities/:commodity/view",
            get(get_dashboard_view),
        )
        // Whole-dataset 3D scatter
        .route("/api/v1/scatter", get(get_scatter))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
