//! CardioRisk Web Server
//!
//! Run with: cargo run -p cardiorisk-web

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use cardiorisk_web::config::{Config, ConfigSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cardiorisk=debug,info")),
        )
        .init();

    info!("Starting CardioRisk web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let (config, source) = Config::load()?;
    match &source {
        ConfigSource::File(path) => info!("Configuration loaded from {}", path.display()),
        ConfigSource::Defaults => tracing::warn!(
            "No cardiorisk.toml found; using defaults. \
             Copy cardiorisk.example.toml to cardiorisk.toml to customise."
        ),
    }

    // Model artifacts are loaded exactly once; without them there is nothing to serve.
    info!(
        "Loading model artifacts: weights={} scaler={}",
        config.artifacts.weights_path.display(),
        config.artifacts.scaler_path.display()
    );
    let state = cardiorisk_web::state::AppState::from_config(&config)
        .context("Failed to load model artifacts")?;
    info!("Risk predictor ready. Form limits enforced: {}", state.form_limits.is_some());

    let app = cardiorisk_web::router::build_router(state);

    let addr = config.socket_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
