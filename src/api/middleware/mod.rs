//! API middleware components

pub mod admin_auth;
pub mod auth;
pub mod logging;
pub mod security;

pub use admin_auth::RequireAdmin;
pub use auth::RequireApiKey;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
