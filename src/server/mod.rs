//! HTTP front end for the collector.

mod payload;
mod routes;

pub use payload::{ActionResult, DataResult, OK_MESSAGE, VersionInfo};
pub use routes::{AppState, MonthParams, router};

use core::net::SocketAddr;
use ohno::IntoAppError;
use std::sync::Arc;

const LOG_TARGET: &str = "    server";

/// Serve the routes on `addr` until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_app_err_with(|| format!("unable to listen on {addr}"))?;

    log::info!(target: LOG_TARGET, "Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_app_err("HTTP server failed")?;

    log::info!(target: LOG_TARGET, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!(target: LOG_TARGET, "Unable to listen for Ctrl-C: {e}");
        core::future::pending::<()>().await;
    }
}
