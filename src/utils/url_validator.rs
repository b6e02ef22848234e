//! Target URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that a target URL is absolute (scheme and host present).
///
/// The URL is stored as received; no normalization is applied.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL does not parse or has no host.
pub fn validate_target_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() })))?;

    if !parsed.has_host() {
        return Err(AppError::bad_request(
            "Invalid URL format: host is required",
            json!({ "url": raw }),
        ));
    }

    Ok(())
}
