//! Product API - Main Application Entry Point
//!
//! A REST API server exposing CRUD operations over an in-memory product
//! catalogue. Every `/api/products` route requires an `x-api-key` header
//! matching the configured secret.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-memory list behind a `tokio::sync::RwLock`, seeded at startup
//! - **Authentication**: shared-secret header, verified in constant time
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Seed the product store
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod extract;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;
mod store;

use tracing_subscriber::EnvFilter;

use crate::{middleware::auth::ApiKeyGuard, state::AppState, store::ProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let store = ProductStore::seeded();
    tracing::info!("Product store seeded with {} products", store.len().await);

    let api_key = ApiKeyGuard::new(&config.api_key);
    let app = routes::router(AppState::new(store, api_key));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
