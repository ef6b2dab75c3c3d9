mod assistant;
mod careers;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod market;
mod matching;
mod models;
mod personality;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::errors::panic_response;
use crate::llm_client::{LlmClient, TextGenerator, UnconfiguredGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career API v{}", env!("CARGO_PKG_VERSION"));

    let catalogs = Catalogs::load()?;
    info!(
        "Catalogs loaded: {} recommendation careers, {} path careers",
        catalogs.recommendation.len(),
        catalogs.paths.len()
    );

    let llm: Arc<dyn TextGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            info!(
                "LLM client initialized (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.llm_timeout
            );
            Arc::new(LlmClient::new(key.clone(), config.llm_timeout)?)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; assistant will answer from fallbacks");
            Arc::new(UnconfiguredGenerator)
        }
    };

    if let Some(seed) = config.mock_data_seed {
        info!("Mock data pinned to seed {seed}");
    }

    let state = AppState {
        config: config.clone(),
        catalogs: Arc::new(catalogs),
        llm,
    };

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
