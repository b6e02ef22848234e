//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}/stats`
///
/// Statistics stay available after the link expires; only the reaper
/// removes them.
///
/// # Errors
///
/// Returns 404 if the shortcode is unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.get_statistics(&code).await?;

    let response = StatsResponse {
        shortcode: stats.link.code,
        total_clicks: stats.link.click_count,
        created_at: stats.link.created_at,
        expires_at: stats.link.expires_at,
        clicks: stats
            .clicks
            .into_iter()
            .map(|click| ClickInfo {
                timestamp: click.clicked_at,
                source_ip: click.source_ip,
                user_agent: click.user_agent,
                referer: click.referer,
            })
            .collect(),
    };

    Ok(Json(response))
}
