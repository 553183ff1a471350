//! Liveness endpoint for the hosting platform.
//!
//! Serves static 200 responses only; it exposes no bot state.

use crate::errors::Result;
use axum::{Router, routing::get};
use std::net::{Ipv4Addr, SocketAddr};
use tracing::info;

/// Body returned by `GET /`.
pub const RUNNING: &str = "Bot is running ✅";

/// Routes answering liveness probes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { RUNNING }))
        .route("/healthz", get(|| async { "ok" }))
}

/// Listens on all interfaces at `port` until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Liveness server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
