//! Task service - CRUD operations over the task store

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{
    validate_task_title, DomainError, NewTask, Task, TaskId, TaskPatch, TaskRepository,
    DEFAULT_PRIORITY,
};

/// Page size used when a caller does not ask for one
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Request to create a new task
#[derive(Debug, Clone, Default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

/// Task service for CRUD operations
#[derive(Debug)]
pub struct TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R: TaskRepository + ?Sized> TaskService<R> {
    /// Create a new TaskService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a task, filling in defaults for omitted fields
    pub async fn create(&self, request: CreateTaskRequest) -> Result<Task, DomainError> {
        validate_task_title(&request.title)?;

        let task = NewTask::new(request.title, Utc::now())
            .with_description(request.description)
            .with_completed(request.completed.unwrap_or(false))
            .with_priority(
                request
                    .priority
                    .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            );

        let created = self.repository.create(task).await?;
        info!(task_id = %created.id, "Task created");

        Ok(created)
    }

    /// List tasks in insertion order
    pub async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<Task>, DomainError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        debug!(skip, limit, "Listing tasks");

        self.repository.list(skip, limit).await
    }

    /// Get a task by id, failing with NotFound if it does not exist
    pub async fn get(&self, id: TaskId) -> Result<Task, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    /// Apply a partial update to a task
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task, DomainError> {
        if let Some(title) = &patch.title {
            validate_task_title(title)?;
        }

        let updated = self
            .repository
            .update(id, patch, Utc::now())
            .await?
            .ok_or_else(|| task_not_found(id))?;

        info!(task_id = %id, "Task updated");
        Ok(updated)
    }

    /// Permanently delete a task
    pub async fn delete(&self, id: TaskId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(task_not_found(id));
        }

        info!(task_id = %id, "Task deleted");
        Ok(())
    }

    /// Check that the task store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}

fn task_not_found(id: TaskId) -> DomainError {
    DomainError::not_found(format!("Task {} not found", id))
}
