//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::interfaces::http::common::ErrorResponse;
use crate::interfaces::http::middleware::{http_metrics_middleware, request_id_middleware};

use super::handlers::{billing, health, metrics};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Billing
        billing::calculate_billing,
    ),
    components(
        schemas(
            billing::BillingRequest,
            billing::BillingResponse,
            health::HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Billing", description = "Parking session fee calculation"),
    ),
    info(
        title = "Carpark Billing API",
        version = "1.0.0",
        description = "REST API for pricing parking sessions",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(prometheus_handle: PrometheusHandle) -> Router {
    health::mark_started();

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        // Billing
        .route("/api/v1/billing", post(billing::calculate_billing))
        // Middleware
        .layer(middleware::from_fn(request_id_middleware))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ─── Tests ───────────────────────────────────────────────────────────
