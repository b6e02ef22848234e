//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

/// A shortened URL link with its expiry window and click counter.
///
/// Invariant: `expires_at == created_at + validity_minutes`.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub validity_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
}

impl Link {
    /// Creates a new Link with the expiry computed from the validity window.
    pub fn new(
        code: String,
        target_url: String,
        validity_minutes: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let expires_at = created_at + Duration::minutes(validity_minutes);
        Self {
            code,
            target_url,
            validity_minutes,
            created_at,
            expires_at,
            click_count: 0,
        }
    }

    /// Returns true if the link is past its expiry time.
    ///
    /// The check is strict: a link is still live at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
