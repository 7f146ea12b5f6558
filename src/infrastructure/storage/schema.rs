//! Schema bootstrap for the `tasks` table
//!
//! The table is created when missing; there is no versioned migration history.

use sqlx::postgres::PgPool;
use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::domain::DomainError;

/// Name of the single persisted table
pub const TASKS_TABLE: &str = "tasks";

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted max row again.
const SQLITE_TASKS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        completed BOOLEAN NOT NULL DEFAULT 0,
        priority TEXT NOT NULL DEFAULT 'medium',
        created_at TEXT NOT NULL,
        updated_at TEXT
    )
"#;

const POSTGRES_TASKS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        priority TEXT NOT NULL DEFAULT 'medium',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ
    )
"#;

/// Creates the `tasks` table in a SQLite database if it does not exist
pub async fn ensure_sqlite_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    sqlx::query(SQLITE_TASKS_DDL)
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create tasks table: {}", e)))?;

    info!(table = TASKS_TABLE, "SQLite schema ready");
    Ok(())
}

/// Creates the `tasks` table in a PostgreSQL database if it does not exist
pub async fn ensure_postgres_schema(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::query(POSTGRES_TASKS_DDL)
        .execute(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create tasks table: {}", e)))?;

    info!(table = TASKS_TABLE, "PostgreSQL schema ready");
    Ok(())
}
