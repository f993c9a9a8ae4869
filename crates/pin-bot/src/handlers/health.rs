//! Health check handlers
//!
//! Endpoints for liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use pin_service::dto::{HealthResponse, ReadinessResponse};

use crate::server::AppState;

/// Basic health check (liveness)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let health = state.health();
    let (storage_healthy, event_bus_healthy) =
        tokio::join!(health.storage_healthy(), health.event_bus_healthy());

    let response = ReadinessResponse::ready(storage_healthy, event_bus_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
