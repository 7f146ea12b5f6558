//! Infrastructure layer - Storage, authentication and service implementations

pub mod api_key;
pub mod logging;
pub mod services;
pub mod storage;
pub mod task;
pub mod usage;
