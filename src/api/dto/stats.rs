//! DTOs for the link statistics endpoint.

use crate::api::dto::clicks::ClickInfo;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a single short link: summary fields plus the full
/// click history in insertion order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<ClickInfo>,
}
