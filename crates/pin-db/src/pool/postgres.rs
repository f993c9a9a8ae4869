//! PostgreSQL connection pool and schema migrations

use pin_common::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Maximum time to wait for a connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum idle time before a connection is closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
/// Maximum lifetime of a connection
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Pool and migration errors
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("Failed to connect: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to migrate: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Apply pending migrations from a directory
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), PoolError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;
    info!(dir = %dir.display(), "Database migrations applied");
    Ok(())
}
