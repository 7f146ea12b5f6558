//! API layer - HTTP endpoints and middleware

pub mod admin;
pub mod docs;
pub mod health;
pub mod middleware;
pub mod root;
pub mod router;
pub mod state;
pub mod tasks;
pub mod types;

pub use middleware::{RequireAdmin, RequireApiKey};
pub use router::create_router;
pub use state::{AppState, ServiceInfo};
