mod analysis;
mod autofix;
mod builder;
mod config;
mod document;
mod errors;
mod models;
mod parsing;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::builder::store::ResumeStore;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    // Tokenizer and lexicons are built once and shared read-only.
    let tokenizer: Arc<dyn Tokenizer> = Arc::new(UnicodeTokenizer);

    let store = Arc::new(ResumeStore::open(&config.storage_dir)?);
    info!("Resume store ready at {}", config.storage_dir.display());

    let state = AppState {
        config: config.clone(),
        tokenizer,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
