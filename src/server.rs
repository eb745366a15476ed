//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, router wiring and the Axum server lifecycle.

use crate::application::services::RequestRouter;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::persistence::{
    MemoryLinkStore, PgLinkStore, RedisLinkStore, TimedLinkStore,
};
use crate::response::ResponseBuilder;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the configured store and wraps it in the read timeout.
///
/// For Postgres the link table is created if it does not exist.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached within the connect
/// timeout or the link table cannot be created.
pub async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let read_timeout = config.read_timeout();

    let store: Arc<dyn LinkStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;

            let store = PgLinkStore::connect(
                url,
                &config.link_table,
                config.db_max_connections,
                config.connect_timeout(),
                read_timeout,
            )
            .await
            .context("Failed to connect to database")?;

            store
                .ensure_table()
                .await
                .context("Failed to create link table")?;

            Arc::new(TimedLinkStore::new(store, read_timeout))
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store")?;

            let store = RedisLinkStore::connect(url, &config.link_table, config.connect_timeout())
                .await
                .context("Failed to connect to Redis")?;

            Arc::new(TimedLinkStore::new(store, read_timeout))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; links are lost on restart");
            Arc::new(TimedLinkStore::new(MemoryLinkStore::new(), read_timeout))
        }
    };

    Ok(store)
}

/// Builds the request router shared by every front door.
pub fn build_router(config: &Config, store: Arc<dyn LinkStore>) -> Arc<RequestRouter> {
    Arc::new(RequestRouter::new(
        store,
        config.allocation_policy(),
        ResponseBuilder::new(config.log_responses),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store
/// - The request router
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let state = AppState::new(build_router(&config, store));

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
