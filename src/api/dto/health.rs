//! DTOs for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// `database` reports the link store's connectivity; the in-memory store
/// is always `connected`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}
