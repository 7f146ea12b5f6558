//! Task domain
//!
//! The single persisted entity of the service.

mod entity;
mod repository;
mod validation;

pub use entity::{NewTask, Task, TaskId, TaskPatch, DEFAULT_PRIORITY};
#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::TaskRepository;
pub use validation::{validate_task_title, TaskValidationError};
