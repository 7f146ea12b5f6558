//! API key authentication infrastructure

mod service;

pub use service::{ApiKeyService, AuthError};
