mod config;
mod errors;
mod llm_client;
mod models;
mod render;
mod resume;
mod routes;
mod state;
mod suggestion;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; provider keys are optional
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Never log the keys themselves
    let credentials = config.credentials();
    info!(
        "Primary provider (OpenAI, model {}): {}",
        llm_client::MODEL,
        if credentials.primary_api_key.is_some() { "configured" } else { "disabled" }
    );
    info!(
        "Secondary provider: {}",
        if credentials.secondary_api_key.is_some() { "configured" } else { "disabled" }
    );

    // Build app state: provider chain + PDF engine
    let state = AppState::from_config(config.clone())?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
