//! Storage infrastructure - backend selection and schema bootstrap

mod factory;
pub mod schema;

pub use factory::{StorageFactory, StorageType};
pub use schema::{ensure_postgres_schema, ensure_sqlite_schema, TASKS_TABLE};
