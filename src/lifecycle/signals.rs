//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C, then trigger shutdown.
///
/// A failed handler installation also triggers shutdown rather than
/// leaving the process unstoppable.
pub async fn ctrl_c_to_shutdown(shutdown: &Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to install Ctrl+C handler"),
    }
    shutdown.trigger();
}
