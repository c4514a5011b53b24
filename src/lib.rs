//! # Launchpad
//!
//! A launcher dashboard: serves a configurable grid of shortcuts
//! (icon + label + launch URI) from an embedded store. Clicking a tile in
//! the dashboard navigates the browser to the shortcut's URI; custom
//! `scheme://` URIs are resolved by an external OS-registered launcher,
//! which is outside this system's control.
//!
//! ## Modules
//!
//! - [`store`]: SQLite-backed shortcut persistence with write-time validation
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchpad::api::{serve, ApiConfig, AppState};
//! use launchpad::store::{default_shortcuts, ShortcutStore, StoreConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ShortcutStore::open(StoreConfig::default())?);
//!
//!     // Populate with the default set
//!     store.delete_all().await?;
//!     store.insert_many(&default_shortcuts()).await?;
//!
//!     // Serve the API
//!     let config = ApiConfig::default();
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    default_shortcuts, validate, NewShortcut, Shortcut, ShortcutStore, StoreConfig, StoreError,
    StoreResult, ValidationError,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    generate_default_config, Config, ConfigError, ApiConfig as ConfigApiConfig, LoggingConfig,
    StoreConfig as ConfigStoreConfig,
};
