//! Task request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Task, TaskPatch, DEFAULT_PRIORITY};
use crate::infrastructure::services::CreateTaskRequest;

/// Body of `POST /tasks/`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TaskCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_priority")]
    #[schema(default = "medium")]
    pub priority: String,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl From<TaskCreate> for CreateTaskRequest {
    fn from(body: TaskCreate) -> Self {
        Self {
            title: body.title,
            description: body.description,
            completed: Some(body.completed),
            priority: Some(body.priority),
        }
    }
}

/// Body of `PUT /tasks/{id}`.
///
/// Only fields present in the JSON are changed. `null` is accepted for
/// `description` (clears it) and rejected for the other fields.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TaskUpdate {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub priority: Option<String>,
}

/// Marks a field as sent; `#[serde(default)]` covers the absent case
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<TaskUpdate> for TaskPatch {
    fn from(body: TaskUpdate) -> Self {
        Self {
            title: body.title,
            description: body.description,
            completed: body.completed,
            priority: body.priority,
        }
    }
}

/// Task representation returned by every task endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.value(),
            title: task.title,
            description: task.description,
            completed: task.completed,
            priority: task.priority,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Query string of `GET /tasks/`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTasksParams {
    /// Number of tasks to skip
    pub skip: Option<u32>,
    /// Maximum number of tasks to return
    pub limit: Option<u32>,
}

/// Confirmation returned by `DELETE /tasks/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let body: TaskCreate = serde_json::from_str(r#"{"title":"Single Task"}"#).unwrap();

        assert_eq!(body.title, "Single Task");
        assert!(!body.completed);
        assert_eq!(body.priority, "medium");
        assert!(body.description.is_none());
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_create_requires_title() {
        assert!(serde_json::from_str::<TaskCreate>(r#"{"description":"x"}"#).is_err());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let body: TaskCreate = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_update_distinguishes_absent_from_null() {
        let body: TaskUpdate = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        let patch = TaskPatch::from(body);
        assert_eq!(patch.completed, Some(true));
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());

        let body: TaskUpdate = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(TaskPatch::from(body).description, Some(None));
    }

    #[test]
    fn test_update_rejects_null_for_required_fields() {
        assert!(serde_json::from_str::<TaskUpdate>(r#"{"title":null}"#).is_err());
        assert!(serde_json::from_str::<TaskUpdate>(r#"{"completed":null}"#).is_err());
    }

    #[test]
    fn test_update_rejects_wrong_types() {
        assert!(serde_json::from_str::<TaskUpdate>(r#"{"completed":"yes"}"#).is_err());
    }
}
