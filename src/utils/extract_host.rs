//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Extracts the request host (including any port) from the `Host` header.
///
/// The value is used verbatim when assembling the returned shortlink, so
/// the port is kept (`localhost:3000` stays `localhost:3000`).
///
/// Returns `None` if the header is missing or not valid UTF-8; callers
/// fall back to the configured public host.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(host_from_headers(&headers), Some("example.com:8080".to_string()));
/// ```
pub fn host_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(|host| host.to_string())
}
