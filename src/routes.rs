//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`                - create a short link
//! - `GET  /shorturls/{code}`         - redirect to the target URL
//! - `GET  /shorturls/{code}/stats`   - click statistics
//! - `GET  /health`                   - health check
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}", get(redirect_handler))
        .route("/shorturls/{code}/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unknown routes.
async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
