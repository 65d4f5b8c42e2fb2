//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory stores, binds the listener, and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tokio::signal;
use tokio::sync::watch;
use tokio::time::timeout;

/// Runs the HTTP server with the given configuration.
///
/// # Shutdown
///
/// On SIGINT or SIGTERM the listener stops accepting connections and
/// in-flight requests get up to `shutdown_grace_seconds` to finish. When the
/// window elapses a warning is logged and the function returns anyway; the
/// stores are dropped with the process.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new();
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let (stop_tx, mut stop_rx) = watch::channel(false);

    let mut server = tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(async move {
                let _ = stop_rx.changed().await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("Server task panicked")??;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
    let _ = stop_tx.send(true);

    match timeout(config.shutdown_grace(), &mut server).await {
        Ok(joined) => {
            joined.context("Server task panicked")??;
            tracing::info!("Graceful shutdown complete");
        }
        Err(_) => {
            tracing::warn!(
                "Requests still in flight after {}s grace period, exiting",
                config.shutdown_grace_seconds
            );
        }
    }

    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
