//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{category_routes, order_routes, product_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Liveness endpoint
        .route("/api/health", get(health))
        // Resource routes
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
        // Unknown endpoints get the 404 envelope
        .fallback(endpoint_not_found)
        // Global middleware; the kiosk frontend is served separately, so
        // /api/* stays open for cross-origin requests
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    /// Which backend the storage adapter settled on at startup
    storage: &'static str,
    timestamp: String,
}

/// Liveness endpoint; reports which storage backend is in use
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        storage: if state.store.is_fallback() {
            "embedded"
        } else {
            "primary"
        },
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Fallback for unknown routes
async fn endpoint_not_found() -> AppError {
    AppError::NotFound
}
