use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;

use larder::api::rest::register_routes;
use larder::config::Config;
use larder::domain::Service;
use larder::infra::storage::migrations::Migrator;
use larder::infra::storage::sea_orm_repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load().context("failed to load configuration")?;

    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to connect to {}", config.database_url))?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("database migrations applied");
    }

    let repos = sea_orm_repositories(Arc::new(db));
    let service = Arc::new(Service::new(repos));
    let app = register_routes(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "admin API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
