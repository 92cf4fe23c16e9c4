//! API server lifecycle.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::routes::{router, AppState};
use crate::Result;

/// Bind and serve until shutdown.
///
/// Runs the router on `addr` and drains gracefully when SIGINT is
/// received.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        taxonomy_codes = state.classifier().taxonomy().len(),
        "ecare-api listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
