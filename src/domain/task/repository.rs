//! Task repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

use super::{NewTask, Task, TaskId, TaskPatch};
use crate::domain::DomainError;

/// Repository for task persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task and returns it with its assigned id
    async fn create(&self, task: NewTask) -> Result<Task, DomainError>;

    /// Finds a task by id
    async fn get(&self, id: TaskId) -> Result<Option<Task>, DomainError>;

    /// Lists tasks in id order, skipping `skip` rows and returning at most `limit`
    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Task>, DomainError>;

    /// Applies a partial update; `None` when the task does not exist
    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Task>, DomainError>;

    /// Deletes a task; `false` when the task does not exist
    async fn delete(&self, id: TaskId) -> Result<bool, DomainError>;

    /// Checks that the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
