//! OS signal handling.
//!
//! SIGINT (Ctrl+C) and, on Unix, SIGTERM both resolve the returned future.

use tokio::sync::broadcast;

/// Wait for an OS termination signal.
pub async fn os_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Resolve on an OS signal or on a programmatic [`Shutdown`](super::Shutdown) trigger.
///
/// A dropped coordinator is not a trigger; only an explicit send is.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let triggered = async move {
        if let Err(broadcast::error::RecvError::Closed) = shutdown.recv().await {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = os_signal() => {
            tracing::info!("Shutdown signal received");
        }
        _ = triggered => {
            tracing::info!("Shutdown triggered");
        }
    }
}
