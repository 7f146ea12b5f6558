//! Application services

mod task_service;

pub use task_service::{CreateTaskRequest, TaskService, DEFAULT_LIST_LIMIT};
