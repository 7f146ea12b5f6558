//! Task entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority assigned to a task when the caller does not supply one
pub const DEFAULT_PRIORITY: &str = "medium";

/// Task identifier, assigned by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted task row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A task that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

impl NewTask {
    /// Create a new task with default completion state and priority
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
            priority: DEFAULT_PRIORITY.to_string(),
            created_at,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Materialize the row once the store has assigned an id
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            priority: self.priority,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Partial update of a task.
///
/// `None` means the field was not sent and is left untouched. `description`
/// is nullable, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
    }

    /// Apply the present fields to `task` and stamp `updated_at`
    pub fn apply_to(self, task: &mut Task, updated_at: DateTime<Utc>) {
        if let Some(title) = self.title {
            task.title = title;
        }

        if let Some(description) = self.description {
            task.description = description;
        }

        if let Some(completed) = self.completed {
            task.completed = completed;
        }

        if let Some(priority) = self.priority {
            task.priority = priority;
        }

        task.updated_at = Some(updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        NewTask::new("X", Utc::now())
            .with_description(Some("keep me".to_string()))
            .with_priority("high")
            .into_task(TaskId::new(1))
    }

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("Write report", Utc::now()).into_task(TaskId::new(3));

        assert_eq!(task.id.value(), 3);
        assert!(!task.completed);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert!(task.description.is_none());
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn test_patch_leaves_absent_fields() {
        let mut task = sample_task();
        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };

        patch.apply_to(&mut task, Utc::now());

        assert_eq!(task.title, "X");
        assert_eq!(task.description.as_deref(), Some("keep me"));
        assert_eq!(task.priority, "high");
        assert!(task.completed);
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_patch_clears_description() {
        let mut task = sample_task();
        let patch = TaskPatch {
            description: Some(None),
            ..Default::default()
        };

        patch.apply_to(&mut task, Utc::now());

        assert!(task.description.is_none());
        assert_eq!(task.title, "X");
    }

    #[test]
    fn test_empty_patch_still_stamps_updated_at() {
        let mut task = sample_task();
        let patch = TaskPatch::default();
        assert!(patch.is_empty());

        patch.apply_to(&mut task, Utc::now());
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_task_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&TaskId::new(42)).unwrap(), "42");
    }
}
