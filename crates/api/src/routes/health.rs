use axum::{routing::get, Router};
use serde::Serialize;

use crate::handlers::fallback;
use crate::response::Reply;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service health.
async fn health_check() -> Reply<HealthResponse> {
    Reply::Ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
