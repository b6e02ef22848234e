//! HTTP server initialization and runtime setup.
//!
//! Wires the store, lifecycle service, and reaper together, then runs the
//! Axum server until a shutdown signal arrives.

use crate::application::reaper::run_reaper;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::memory::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Link lifecycle service
/// - Background reaper for expired links
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or
/// a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryLinkRepository::new());
    tracing::info!("In-memory link store initialized");

    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        config.default_validity_minutes,
    ));

    tokio::spawn(run_reaper(
        repository,
        Duration::from_secs(config.sweep_interval_seconds),
    ));
    tracing::info!(
        interval_seconds = config.sweep_interval_seconds,
        "Reaper started"
    );

    let state = AppState {
        link_service,
        public_host: config.public_host,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received, shutting down gracefully"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down gracefully"),
    }
}
