//! Liveness and readiness handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use breed_inquiry_types::runtime::{LivenessResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Handler for liveness and readiness probes
pub struct HealthHandler;

impl HealthHandler {
    /// Handle GET /
    ///
    /// Always answers, independent of storage state.
    pub async fn liveness() -> Json<LivenessResponse> {
        Json(LivenessResponse::running())
    }

    /// Handle GET /health
    pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
        match state.executor.health_check().await {
            Ok(()) => (StatusCode::OK, Json(ReadinessResponse::up())),
            Err(e) => {
                warn!("Readiness check failed: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, Json(ReadinessResponse::down()))
            }
        }
    }
}
