use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use telas_data::repositories::UserRepo;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the external data service is reachable.
    pub data_service_healthy: bool,
}

/// GET /health -- returns service and data-service health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_service_healthy = UserRepo::ping(&state.data).await.is_ok();

    let status = if data_service_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        data_service_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
