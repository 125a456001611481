//! HTTP server initialization and runtime setup.
//!
//! Handles pool construction, migrations, state wiring, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::{ProductService, UserService};
use crate::config::Config;
use crate::domain::repositories::{ProductRepository, UserRepository};
use crate::infrastructure::persistence::{
    InMemoryProductRepository, InMemoryUserRepository, PgProductRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (created once, shared for the process
///   lifetime) or in-memory stores when `IN_MEMORY` is set
/// - Schema migrations
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (state, pool) = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(pool) = pool {
        tracing::info!("Closing database pool");
        pool.close().await;
    }

    Ok(())
}

/// Builds application state, returning the pool so `run` can close it on
/// shutdown.
async fn build_state(config: &Config) -> Result<(AppState, Option<PgPool>)> {
    if config.in_memory {
        tracing::warn!("Running with in-memory stores; data will not persist");

        let user_repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(InMemoryProductRepository::new());

        let state = AppState::new(
            Arc::new(UserService::new(user_repository)),
            Arc::new(ProductService::new(product_repository)),
        );

        return Ok((state, None));
    }

    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required unless IN_MEMORY is set"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool_arc = Arc::new(pool.clone());
    let user_repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool_arc.clone()));
    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(PgProductRepository::new(pool_arc));

    let state = AppState::new(
        Arc::new(UserService::new(user_repository)),
        Arc::new(ProductService::new(product_repository)),
    );

    Ok((state, Some(pool)))
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
    }
    tracing::info!("Shutdown signal received");
}
