//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Captures request metadata for analytics. All metadata fields are
/// optional and stored as received, never validated.
#[derive(Debug, Clone)]
pub struct Click {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl Click {
    pub fn new(
        code: String,
        clicked_at: DateTime<Utc>,
        source_ip: Option<String>,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Self {
        Self {
            code,
            clicked_at,
            source_ip,
            user_agent,
            referer,
        }
    }
}

/// Client request metadata attached to a redirect.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}
