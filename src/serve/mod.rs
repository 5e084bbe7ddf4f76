// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport: POST /ask, GET /test, GET /health.
//!
//! The engine is built before binding and shared read-only behind an `Arc`.

use anyhow::{Context, Result};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use faqmatch::engine::{diagnose, Answer, Diagnostic, EngineState, EngineStats};

/// Request body for POST /ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: EngineStats,
}

pub type SharedEngine = Arc<EngineState>;

/// Resolve the listen address; `port` replaces the port of `bind`.
pub fn resolve_addr(bind: &str, port: Option<u16>) -> Result<SocketAddr> {
    let mut addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind))?;
    if let Some(port) = port {
        addr.set_port(port);
    }
    Ok(addr)
}

async fn handle_ask(
    State(engine): State<SharedEngine>,
    Json(body): Json<AskRequest>,
) -> Json<Answer> {
    // A missing query is answered like an empty one.
    let query = body.query.unwrap_or_default();
    Json(engine.answer(&query))
}

async fn handle_test(State(engine): State<SharedEngine>) -> Json<Vec<Diagnostic>> {
    Json(diagnose(&engine))
}

async fn handle_health(State(engine): State<SharedEngine>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        stats: engine.stats(),
    })
}

pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/ask", post(handle_ask))
        .route("/test", get(handle_test))
        .route("/health", get(handle_health))
        .with_state(engine)
}

/// Serve until Ctrl+C.
pub async fn serve(engine: EngineState, addr: SocketAddr) -> Result<()> {
    let app = router(Arc::new(engine));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;
    tracing::info!(%addr, "faqmatch listening (Ctrl+C to stop)");
    eprintln!("faqmatch listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("faqmatch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "cannot listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
}

/// Blocking entry point for the `serve` command.
pub fn run(engine: EngineState, addr: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Cannot start tokio runtime")?;
    runtime.block_on(serve(engine, addr))
}
