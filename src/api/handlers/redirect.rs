//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::domain::entities::ClientInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its target URL, recording the click.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Click Tracking
///
/// The click event (peer IP, `User-Agent`, `Referer`) and the counter
/// increment are both written before the redirect is returned. Expired
/// links record nothing.
///
/// # Errors
///
/// Returns 404 if the shortcode is unknown and 410 if the link has
/// expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let client = ClientInfo {
        source_ip: Some(addr.ip().to_string()),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        referer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let target_url = state
        .link_service
        .resolve_and_record_click(&code, client)
        .await?;

    // 302 Found, matching the documented redirect contract.
    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response())
}
