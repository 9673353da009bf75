//! Graceful shutdown handling.

use log::{info, warn};

/// Resolves when the process receives Ctrl-C.
///
/// Passed to the dashboard server as its graceful-shutdown trigger: the
/// listener closes and in-flight searches run to completion. Never resolves
/// if the signal handler cannot be installed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested, finishing in-flight requests"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
