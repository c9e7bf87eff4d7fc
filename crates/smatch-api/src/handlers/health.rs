//! Root and health check handlers.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Welcome payload for the root route.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Root endpoint.
///
/// GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "SMatch Backend API".to_string(),
    })
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
