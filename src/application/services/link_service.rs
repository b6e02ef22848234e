//! Link lifecycle service: creation, redirect resolution, statistics.

use std::sync::Arc;

use crate::domain::entities::{Click, ClientInfo, Link};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

/// A freshly created link together with its public shortlink URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub shortlink: String,
}

/// A link's summary fields with its full click history.
#[derive(Debug, Clone)]
pub struct LinkStatistics {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Upper bound on a client-supplied validity window, in minutes.
///
/// 100 years. Anything larger is meaningless for a short link and would
/// overflow chrono's datetime arithmetic long before it mattered.
const MAX_VALIDITY_MINUTES: i64 = 100 * 365 * 24 * 60;

/// The only component with business rules: validates input, generates
/// shortcodes, evaluates expiry, and records clicks.
///
/// Never recovers an error locally; every failure surfaces unchanged to
/// the handler layer.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    default_validity_minutes: i64,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, default_validity_minutes: i64) -> Self {
        Self {
            repository,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - the URL to shorten; must be absolute
    /// - `validity` - TTL in minutes; unset or non-positive falls back to the default
    /// - `custom_code` - optional requested shortcode (validated if provided)
    /// - `hostname` - host used to assemble the returned shortlink
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or shortcode
    /// or a validity beyond [`MAX_VALIDITY_MINUTES`],
    /// [`AppError::Conflict`] if the requested shortcode is taken, and
    /// [`AppError::Internal`] if code generation exhausts its attempts.
    pub async fn create_short_link(
        &self,
        target_url: String,
        validity: Option<i64>,
        custom_code: Option<String>,
        hostname: &str,
    ) -> Result<CreatedLink, AppError> {
        validate_target_url(&target_url)?;

        let validity_minutes = match validity {
            Some(minutes) if minutes > MAX_VALIDITY_MINUTES => {
                return Err(AppError::bad_request(
                    "Validity exceeds the maximum supported window",
                    json!({ "validity": minutes, "max_minutes": MAX_VALIDITY_MINUTES }),
                ));
            }
            Some(minutes) if minutes > 0 => minutes,
            _ => self.default_validity_minutes,
        };
        let now = Utc::now();

        let link = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;
            self.repository
                .create(Link::new(custom, target_url, validity_minutes, now))
                .await?
        } else {
            self.create_with_generated_code(target_url, validity_minutes)
                .await?
        };

        info!(code = %link.code, expires_at = %link.expires_at, "short link created");

        let shortlink = format!("http://{hostname}/shorturls/{}", link.code);
        Ok(CreatedLink { link, shortlink })
    }

    /// Resolves a shortcode to its target URL and records the click.
    ///
    /// Both writes (click event and counter) complete before the target
    /// URL is returned. Expired links are rejected without recording
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Gone`] for an expired link.
    pub async fn resolve_and_record_click(
        &self,
        code: &str,
        client: ClientInfo,
    ) -> Result<String, AppError> {
        let link = self.get_link(code).await?;

        let now = Utc::now();
        if link.is_expired_at(now) {
            warn!(code = %code, expired_at = %link.expires_at, "expired shortcode accessed");
            return Err(AppError::gone(
                "Short URL has expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            ));
        }

        self.repository
            .append_click(Click::new(
                code.to_string(),
                now,
                client.source_ip,
                client.user_agent,
                client.referer,
            ))
            .await?;
        self.repository.increment_clicks(code).await?;

        info!(code = %code, target = %link.target_url, "redirect recorded");
        Ok(link.target_url)
    }

    /// Returns a link's summary fields and full click history.
    ///
    /// Deliberately performs no expiry check: statistics stay readable
    /// after expiry until the reaper removes the link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn get_statistics(&self, code: &str) -> Result<LinkStatistics, AppError> {
        let link = self.get_link(code).await?;
        let clicks = self.repository.get_clicks(code).await?;

        Ok(LinkStatistics { link, clicks })
    }

    async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "code": code }))
        })
    }

    /// Generates a unique shortcode and inserts the link, retrying on
    /// collision.
    ///
    /// The existence check is only a cheap pre-filter; the atomic insert
    /// decides. A candidate that loses the insert race counts as a
    /// collision and burns an attempt, keeping request latency bounded.
    async fn create_with_generated_code(
        &self,
        target_url: String,
        validity_minutes: i64,
    ) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.exists(&code).await? {
                continue;
            }

            match self
                .repository
                .create(Link::new(
                    code,
                    target_url.clone(),
                    validity_minutes,
                    Utc::now(),
                ))
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Unable to generate unique shortcode",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
