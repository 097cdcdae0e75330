//! # Liveness Endpoint
//!
//! Tiny HTTP responder for uptime monitors and hosts that require an open port.
//! Every request gets `200 Bot is running!`; it never touches bot state.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::{Context as _, Result};
use axum::http::StatusCode;
use axum::routing::any;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub const LIVENESS_BODY: &str = "Bot is running!";

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, LIVENESS_BODY)
}

/// Router answering every path and method with the liveness body
pub fn router() -> Router {
    Router::new().route("/", any(alive)).fallback(alive)
}

/// Serve the liveness endpoint on `0.0.0.0:port` until `shutdown` is cancelled
pub async fn serve(port: u16, shutdown: CancellationToken) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness endpoint on {addr}"))?;

    info!("🌐 Web server running on port {port}");

    axum::serve(listener, router())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("Liveness endpoint stopped unexpectedly")?;

    info!("🌐 Web server stopped");
    Ok(())
}
