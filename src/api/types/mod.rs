//! API wire types and extractors

pub mod error;
pub mod extract;
pub mod json;
pub mod task;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use extract::{Path, Query};
pub use json::Json;
pub use task::{ListTasksParams, MessageResponse, TaskCreate, TaskResponse, TaskUpdate};
