//! EduBuddy · AI Tutoring Backend
//!
//! - Axum HTTP API (tutoring chat, quiz bank, learning-style questionnaire,
//!   progress dashboard)
//! - Optional OpenAI integration (via environment variables); without it the
//!   canned adaptive tutor answers every turn
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   OPENAI_API_KEY    : enables hosted tutoring if present
//!   OPENAI_BASE_URL   : default "https://api.openai.com/v1"
//!   OPENAI_MODEL      : default "gpt-4o-mini"
//!   TUTOR_CONFIG_PATH : path to TOML config (prompts + optional quiz bank)
//!   STATE_PATH        : JSON file for the keyed blob store (memory-only if unset)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod config;
mod content;
mod domain;
mod logic;
mod openai;
mod protocol;
mod provider;
mod routes;
mod state;
mod store;
mod telemetry;
mod tracker;
mod tutor;
mod util;

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    // Build shared application state (provider, quiz bank, blob store).
    let state = Arc::new(AppState::new());

    // Build the HTTP router with routes, CORS and tracing layers.
    let app = build_router(state.clone());

    // Read port from env or default to 3000.
    let addr: SocketAddr = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

    let listener = TcpListener::bind(addr).await?;
    info!(target: "edubuddy_backend", %addr, "HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
