//! HTTP surface: `GET /help` and `POST /ping`.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::consts::{HELP_PATH, PING_PATH};

/// Body returned for a created ping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponse {
    pub status:      &'static str,
    /// RFC 3339, UTC, second precision
    pub received_at: String,
}

pub fn router() -> Router {
    Router::new()
        .route(HELP_PATH, get(help_handler))
        .route(PING_PATH, post(ping_handler))
        .layer(TraceLayer::new_for_http())
}

/// Serves [`router`] on `listener` until Ctrl-C.
///
/// # Errors
/// Returns the I/O error that stopped the accept loop.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn help_text() -> String {
    format!(
        "{name} {version}\n\n\
         GET  {HELP_PATH}  show this page\n\
         POST {PING_PATH}  record a ping, answers 201 with {{\"status\":\"pong\"}}\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

async fn help_handler() -> impl IntoResponse {
    tracing::debug!("help requested");
    ([(header::CACHE_CONTROL, "no-cache")], help_text())
}

async fn ping_handler() -> impl IntoResponse {
    let body = PingResponse {
        status:      "pong",
        received_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    tracing::info!(received_at = %body.received_at, "ping created");
    (StatusCode::CREATED, Json(body))
}
