//! Repository Selection
//!
//! Builds the pair of stores the service runs on from configuration.

use std::sync::Arc;

use sqlx::PgPool;

use super::config::{AppConfig, StorageBackend};
use super::database::{self, DatabaseSetupError};
use super::network_repository::{InMemoryNetworkRepository, PostgresNetworkRepository};
use super::user_repository::{InMemoryUserRepository, PostgresUserRepository};
use crate::domain::gateways::{NetworkRepository, UserRepository};

/// The network and user stores, always from the same backend
#[derive(Clone)]
pub struct Repositories {
    pub networks: Arc<dyn NetworkRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Fresh, empty process-local stores
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            networks: Arc::new(InMemoryNetworkRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    /// Stores sharing one PostgreSQL pool; the schema must already exist
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            networks: Arc::new(PostgresNetworkRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool)),
        }
    }

    /// Select the backend named by `storage.backend`
    ///
    /// For PostgreSQL this connects and applies migrations before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or migrated.
    pub async fn from_config(config: &AppConfig) -> Result<Self, DatabaseSetupError> {
        match config.storage.backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let pool = database::create_pool(&config.database).await?;
                tracing::info!("Database connection pool created");

                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations completed");

                Ok(Self::postgres(pool))
            }
        }
    }
}
