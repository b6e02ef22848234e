//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to shorten (must be an absolute URL).
    ///
    /// Defaults to empty when absent so a missing field reports the same
    /// 400 as an empty one.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Validity window in minutes. Defaults to 30 when unset or non-positive.
    pub validity: Option<i64>,

    /// Optional requested shortcode (4-20 chars, `[A-Za-z0-9_-]`).
    pub shortcode: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    /// Full short URL, e.g. `http://localhost:3000/shorturls/a1b2c3`.
    pub shortlink: String,

    /// Expiry timestamp in RFC 3339 form.
    pub expiry: DateTime<Utc>,
}
