//! Handler for short link creation.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::host_from_headers;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,          // optional, minutes
///   "shortcode": "my_code"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the shortlink and its expiry:
///
/// ```json
/// {
///   "shortlink": "http://localhost:3000/shorturls/a1b2c3",
///   "expiry": "2026-08-25T12:30:00Z"
/// }
/// ```
///
/// The shortlink host comes from the request `Host` header, falling back
/// to the configured public host.
///
/// # Errors
///
/// Returns 400 for a missing/invalid URL or malformed shortcode, and 409
/// when the requested shortcode is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let hostname = host_from_headers(&headers).unwrap_or_else(|| state.public_host.clone());

    let created = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode, &hostname)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            shortlink: created.shortlink,
            expiry: created.link.expires_at,
        }),
    ))
}
