//! Domain layer - Core business logic and entities

pub mod api_key;
pub mod error;
pub mod task;
pub mod usage;

pub use api_key::{ApiKeyIdentity, ApiKeyRing, CurrentUser, KeyRingError, KeyTier};
pub use error::DomainError;
pub use task::{
    validate_task_title, NewTask, Task, TaskId, TaskPatch, TaskRepository, TaskValidationError,
    DEFAULT_PRIORITY,
};
pub use usage::{UsageKey, UsageRecord, UsageStore};
