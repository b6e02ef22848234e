//! Periodic sweep of expired links.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::LinkRepository;
use chrono::Utc;
use tracing::{error, info};

/// Runs the expired-link reaper until the process shuts down.
///
/// On each tick the store drops every link past its expiry together with
/// its click history. This is the only bound on memory growth; redirect
/// and statistics paths never delete anything.
///
/// Sweep failures are logged and the schedule continues.
pub async fn run_reaper(repository: Arc<dyn LinkRepository>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick fires immediately; skip it so startup does not sweep.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match repository.sweep_expired(Utc::now()).await {
            Ok(removed) => {
                info!(removed, "expired link sweep completed");
            }
            Err(e) => {
                error!(error = %e, "expired link sweep failed");
            }
        }
    }
}
