//! Health check handler
//!
//! Provides a health check endpoint for monitoring the API status.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Public health check response
///
/// Simple status indicator for load balancers and health monitoring.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// GET /health
///
/// Basic liveness probe; requires no state beyond the process being up.
///
/// # Example
/// ```bash
/// curl http://localhost:8080/health
/// # Returns: {"status":"ok"}
/// ```
pub async fn health_check(State(_state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
