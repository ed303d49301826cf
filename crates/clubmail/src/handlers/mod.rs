//! HTTP handlers for the verification email service

mod types;
mod verification;

pub use types::AppState;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use types::HealthResponse;

/// Build the service router with CORS and request tracing applied.
///
/// CORS is fully permissive: the dispatch endpoint is called from the
/// signup page on whatever origin the frontend is served from.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(verification::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check
#[utoipa::path(
    tag = "Service",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(verification::send_verification_email, health),
    components(schemas(
        types::SendVerificationRequest,
        types::SendVerificationResponse,
        types::HealthResponse,
    )),
    tags(
        (name = "Verification", description = "Verification email dispatch"),
        (name = "Service", description = "Service status")
    )
)]
pub struct ApiDoc;
