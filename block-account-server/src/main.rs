//! Block account API server binary.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use block_account_postgres::repository::db_init::init_database;
use block_account_postgres::PostgresRepositories;
use block_account_server::config::AppConfig;
use block_account_server::routes;
use block_account_server::service::BlockAccountServiceImpl;
use block_account_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "block_account_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url())
        .await
        .context("cannot reach database")?;

    init_database(&pool)
        .await
        .context("failed to initialize database schema")?;

    let repositories = PostgresRepositories::new(Arc::new(pool));
    let service = BlockAccountServiceImpl::new(
        Arc::new(repositories.block_account_repository()),
        config.store_timeout(),
    );
    let state = AppState::new(Arc::new(service));
    let app = routes::create_router(state);

    let addr: std::net::SocketAddr = config
        .bind_address()
        .parse()
        .context("invalid bind address")?;
    tracing::info!(%addr, "block account server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
