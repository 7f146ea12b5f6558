//! Task Manager API
//!
//! A small task-management HTTP service:
//! - Bearer API keys resolved to the `demo`, `ci_cd` and `admin` tiers
//! - Task CRUD over SQLite, PostgreSQL or an in-memory store
//! - Per-client usage counters readable through an admin-only report

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, ServiceInfo};
use domain::{DomainError, TaskRepository};
use infrastructure::{
    api_key::ApiKeyService, services::TaskService, storage::StorageFactory,
    usage::InMemoryUsageStore,
};
use tracing::info;

/// Create the application state with the configured storage backend
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = StorageFactory::create_task_repository(&config.database).await?;
    let state = build_app_state(config, repository)?;

    info!(
        environment = state.info.environment.as_str(),
        docs_enabled = state.info.docs_enabled,
        "Application state initialized"
    );

    Ok(state)
}

/// Wire the services around an already-connected task repository
pub fn build_app_state(
    config: &AppConfig,
    repository: Arc<dyn TaskRepository>,
) -> Result<AppState, DomainError> {
    let keys = config
        .api_keys
        .key_ring()
        .map_err(|e| DomainError::configuration(format!("Invalid API key configuration: {}", e)))?;

    let usage = Arc::new(InMemoryUsageStore::new());

    Ok(AppState {
        task_service: Arc::new(TaskService::new(repository)),
        api_key_service: Arc::new(ApiKeyService::new(keys, usage)),
        info: ServiceInfo {
            environment: config.environment,
            docs_enabled: config.docs_enabled(),
        },
    })
}
