//! PostgreSQL task repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{DomainError, NewTask, Task, TaskId, TaskPatch, TaskRepository};

use super::row::{TaskRow, TASK_COLUMNS};

/// PostgreSQL implementation of TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    /// Returns the stored row, so timestamps carry the column's precision
    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            r#"
            INSERT INTO tasks (title, description, completed, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(&task.priority)
        .bind(task.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create task: {}", e)))?;

        Ok(Task::from(row))
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, DomainError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get task: {}", e)))?;

        Ok(row.map(Task::from))
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Task>, DomainError> {
        let rows = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {} FROM tasks ORDER BY id LIMIT $1 OFFSET $2",
            TASK_COLUMNS
        ))
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list tasks: {}", e)))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Task>, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE tasks SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = patch.title {
            builder.push(", title = ").push_bind(title);
        }
        if let Some(description) = patch.description {
            builder.push(", description = ").push_bind(description);
        }
        if let Some(completed) = patch.completed {
            builder.push(", completed = ").push_bind(completed);
        }
        if let Some(priority) = patch.priority {
            builder.push(", priority = ").push_bind(priority);
        }

        builder.push(" WHERE id = ").push_bind(id.value());
        builder.push(" RETURNING ").push(TASK_COLUMNS);

        let row = builder
            .build_query_as::<TaskRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update task: {}", e)))?;

        Ok(row.map(Task::from))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete task: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::storage(format!("PostgreSQL ping failed: {}", e)))
    }
}
