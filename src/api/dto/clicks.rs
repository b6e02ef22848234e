//! Click record DTO shared by statistics responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single recorded click, as exposed in statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
}
