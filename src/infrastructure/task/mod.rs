//! Task repository implementations

mod in_memory;
mod postgres_repository;
mod row;
mod sqlite_repository;

pub use in_memory::InMemoryTaskRepository;
pub use postgres_repository::PostgresTaskRepository;
pub use sqlite_repository::SqliteTaskRepository;
