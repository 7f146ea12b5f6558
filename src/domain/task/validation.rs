//! Task validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Task validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskValidationError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
}

impl From<TaskValidationError> for DomainError {
    fn from(err: TaskValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate a task title.
///
/// Only the empty string is rejected; whitespace is kept as sent.
pub fn validate_task_title(title: &str) -> Result<(), TaskValidationError> {
    if title.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }

    Ok(())
}
