//! Database Connection Management
//!
//! Utilities for creating and migrating the PostgreSQL connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use super::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Unable to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Unable to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns an error if no connection can be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseSetupError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
        .map_err(DatabaseSetupError::Connect)
}

/// Apply the embedded migrations under `migrations/`
///
/// # Errors
///
/// Returns an error if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseSetupError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// True when `err` is a unique violation raised by the named constraint
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation() && db_err.constraint() == Some(constraint))
}
