//! Launchpad API Server
//!
//! Run with: cargo run --bin launchpad-api
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `launchpad-cli config`) with environment
//! variable overrides:
//! - `LAUNCHPAD_DATA_DIR`: Store directory (default: platform data dir)
//! - `LAUNCHPAD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHPAD_API_PORT`: Port to listen on (default: 8085)
//! - `LAUNCHPAD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHPAD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use launchpad::api::{serve, ApiConfig, AppState};
use launchpad::config::{Config, LoggingConfig};
use launchpad::store::{ShortcutStore, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Launchpad API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.store.data_dir);

    let store = Arc::new(ShortcutStore::open(StoreConfig::new(
        &config.store.data_dir,
    ))?);
    tracing::info!("Shortcut store opened");

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);

    let state = AppState::new(store, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Launchpad API server stopped");
    Ok(())
}

/// Initialize tracing from the logging section, letting RUST_LOG win
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "launchpad={},tower_http=warn",
            logging.level
        ))
    });

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
