//! Row mapping shared by the SQL repositories

use chrono::{DateTime, Utc};

use crate::domain::{Task, TaskId};

pub(crate) const TASK_COLUMNS: &str =
    "id, title, description, completed, priority, created_at, updated_at";

/// Raw `tasks` row as decoded by sqlx
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId::new(row.id),
            title: row.title,
            description: row.description,
            completed: row.completed,
            priority: row.priority,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
