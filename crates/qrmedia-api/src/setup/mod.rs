//! Application setup and initialization
//!
//! All application initialization logic lives here, extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use qrmedia_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize telemetry before anything that logs
    crate::telemetry::init_telemetry().context("Failed to initialize telemetry")?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage
    let storage = qrmedia_storage::create_storage(&config).context("Failed to setup storage")?;

    let state = Arc::new(AppState { config, storage });

    // Setup routes
    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}
