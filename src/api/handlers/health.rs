//! Handler for the health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// The `database` field reports link store connectivity; the in-memory
/// store has no connection to lose, so it always reads `connected`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        database: "connected".to_string(),
    })
}
