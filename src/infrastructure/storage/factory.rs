//! Storage factory for runtime backend selection

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::{DomainError, TaskRepository};
use crate::infrastructure::task::{
    InMemoryTaskRepository, PostgresTaskRepository, SqliteTaskRepository,
};

use super::schema::{ensure_postgres_schema, ensure_sqlite_schema};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-process storage, lost on restart
    InMemory,
    /// SQLite file or in-memory database
    Sqlite,
    /// PostgreSQL server
    Postgres,
}

impl StorageType {
    /// Derive the backend from a `DATABASE_URL` value
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();

        if url.eq_ignore_ascii_case("memory") {
            return Some(Self::InMemory);
        }

        let scheme = url.split(':').next()?.to_lowercase();

        match scheme.as_str() {
            "sqlite" => Some(Self::Sqlite),
            "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for creating task repositories
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Connects to the configured backend and makes sure the schema exists
    pub async fn create_task_repository(
        config: &DatabaseConfig,
    ) -> Result<Arc<dyn TaskRepository>, DomainError> {
        let storage_type = StorageType::from_url(&config.url).ok_or_else(|| {
            DomainError::configuration(format!(
                "Unsupported DATABASE_URL '{}': expected sqlite:, postgres: or memory",
                config.url
            ))
        })?;

        info!("Storage backend: {:?}", storage_type);

        match storage_type {
            StorageType::InMemory => Ok(Arc::new(InMemoryTaskRepository::new())),
            StorageType::Sqlite => Ok(Arc::new(Self::create_sqlite(config).await?)),
            StorageType::Postgres => Ok(Arc::new(Self::create_postgres(config).await?)),
        }
    }

    /// Creates a SQLite-backed repository, creating the database file if missing
    pub async fn create_sqlite(config: &DatabaseConfig) -> Result<SqliteTaskRepository, DomainError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DomainError::configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        // Every connection to `sqlite::memory:` opens its own database.
        let max_connections = if config.url.contains(":memory:") {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open SQLite database: {}", e)))?;

        ensure_sqlite_schema(&pool).await?;
        Ok(SqliteTaskRepository::new(pool))
    }

    /// Creates a PostgreSQL-backed repository
    pub async fn create_postgres(
        config: &DatabaseConfig,
    ) -> Result<PostgresTaskRepository, DomainError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!("PostgreSQL connection established");

        ensure_postgres_schema(&pool).await?;
        Ok(PostgresTaskRepository::new(pool))
    }
}
