//! EdgeShop - a storefront server over a key-value store
//!
//! Renders product pages from static templates, keeps the shopping cart in
//! a client cookie, and exposes a JSON API with filtering, sorting and
//! multipart product CRUD.

mod api;
mod cache;
mod cart;
mod catalog;
mod config;
mod error;
mod models;
mod pricing;
mod render;
mod store;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use models::Catalog;
use tasks::spawn_cleanup_task;

/// Main entry point for the EdgeShop server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create application state over an in-memory store
/// 4. Seed the catalog from `CATALOG_PATH` if configured
/// 5. Start background cache sweep task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edgeshop=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EdgeShop");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cleanup_interval={}s, shipping={:?}",
        config.server_port, config.cache_ttl, config.cleanup_interval, config.shipping
    );

    // Create application state over an in-memory store
    let state = AppState::from_config(&config);

    // Optionally seed the catalog from a JSON file; a failed seed leaves
    // the store empty rather than aborting startup.
    if let Some(path) = &config.catalog_path {
        match seed_catalog(&state, path).await {
            Ok(count) => info!("Seeded catalog with {count} products from {path}"),
            Err(e) => warn!("Failed to seed catalog from {path}: {e:#}"),
        }
    }

    // Start background cache sweep task
    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
    info!("Background cache sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Loads a catalog JSON document from disk into the store.
async fn seed_catalog(state: &AppState, path: &str) -> anyhow::Result<usize> {
    let bytes = tokio::fs::read(path).await?;
    let catalog: Catalog = serde_json::from_slice(&bytes)?;
    let count = catalog.products.len();
    state.catalog.repo().put_catalog(&catalog).await?;
    Ok(count)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cache sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the cache sweep task
    cleanup_handle.abort();
    warn!("Cache sweep task aborted");
}
