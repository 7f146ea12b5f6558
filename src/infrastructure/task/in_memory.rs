//! In-memory task repository

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{DomainError, NewTask, Task, TaskId, TaskPatch, TaskRepository};

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

/// In-memory task repository.
///
/// Ids start at 1 and only grow, so a deleted id is never handed out again.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    state: RwLock<State>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task, DomainError> {
        let mut state = self.state.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire write lock: {}", e))
        })?;

        state.last_id += 1;
        let task = task.into_task(TaskId::new(state.last_id));
        state.tasks.insert(task.id, task.clone());

        Ok(task)
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, DomainError> {
        let state = self.state.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Task>, DomainError> {
        let state = self.state.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state
            .tasks
            .values()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Task>, DomainError> {
        let mut state = self.state.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(task, updated_at);
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, DomainError> {
        let mut state = self.state.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(state.tasks.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.state
            .read()
            .map(|_| ())
            .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repository: &InMemoryTaskRepository, count: usize) -> Vec<Task> {
        let mut created = Vec::new();
        for i in 0..count {
            let task = repository
                .create(NewTask::new(format!("Task {}", i), Utc::now()))
                .await
                .unwrap();
            created.push(task);
        }
        created
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repository = InMemoryTaskRepository::new();
        let tasks = seed(&repository, 3).await;

        let ids: Vec<i64> = tasks.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let repository = InMemoryTaskRepository::new();
        let tasks = seed(&repository, 2).await;

        assert!(repository.delete(tasks[1].id).await.unwrap());
        let next = repository
            .create(NewTask::new("after delete", Utc::now()))
            .await
            .unwrap();

        assert_eq!(next.id.value(), 3);
    }

    #[tokio::test]
    async fn test_list_skip_and_limit() {
        let repository = InMemoryTaskRepository::new();
        seed(&repository, 5).await;

        let page = repository.list(2, 2).await.unwrap();
        let titles: Vec<&str> = page.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 2", "Task 3"]);

        assert!(repository.list(10, 5).await.unwrap().is_empty());
        assert!(repository.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repository = InMemoryTaskRepository::new();
        let result = repository
            .update(TaskId::new(99), TaskPatch::default(), Utc::now())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repository = InMemoryTaskRepository::new();
        let task = repository
            .create(
                NewTask::new("X", Utc::now())
                    .with_description(Some("desc".to_string()))
                    .with_priority("low"),
            )
            .await
            .unwrap();

        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        let updated = repository
            .update(task.id, patch, Utc::now())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "X");
        assert_eq!(updated.description.as_deref(), Some("desc"));
        assert_eq!(updated.priority, "low");
        assert!(updated.completed);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(repository.get(task.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repository = InMemoryTaskRepository::new();
        let tasks = seed(&repository, 1).await;

        assert!(repository.delete(tasks[0].id).await.unwrap());
        assert!(!repository.delete(tasks[0].id).await.unwrap());
        assert!(repository.get(tasks[0].id).await.unwrap().is_none());
    }
}
