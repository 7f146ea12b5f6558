//! Application state for shared services

use std::sync::Arc;

use crate::config::Environment;
use crate::domain::usage::{UsageKey, UsageRecord, UsageStore};
use crate::domain::{ApiKeyIdentity, DomainError, Task, TaskId, TaskPatch, TaskRepository};
use crate::infrastructure::api_key::{ApiKeyService, AuthError};
use crate::infrastructure::services::{CreateTaskRequest, TaskService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub task_service: Arc<dyn TaskServiceTrait>,
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
    pub info: ServiceInfo,
}

/// Static facts about the running service
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub environment: Environment,
    pub docs_enabled: bool,
}

/// Trait for task service operations
#[async_trait::async_trait]
pub trait TaskServiceTrait: Send + Sync {
    async fn create(&self, request: CreateTaskRequest) -> Result<Task, DomainError>;
    async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<Task>, DomainError>;
    async fn get(&self, id: TaskId) -> Result<Task, DomainError>;
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task, DomainError>;
    async fn delete(&self, id: TaskId) -> Result<(), DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Trait for API key authentication
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn verify_api_key(
        &self,
        credential: &str,
        client_address: &str,
    ) -> Result<ApiKeyIdentity, AuthError>;
    fn verify_admin_key(&self, credential: &str) -> Result<(), AuthError>;
    async fn usage_snapshot(&self) -> Result<Vec<(UsageKey, UsageRecord)>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: TaskRepository + ?Sized + 'static> TaskServiceTrait for TaskService<R> {
    async fn create(&self, request: CreateTaskRequest) -> Result<Task, DomainError> {
        TaskService::create(self, request).await
    }

    async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<Task>, DomainError> {
        TaskService::list(self, skip, limit).await
    }

    async fn get(&self, id: TaskId) -> Result<Task, DomainError> {
        TaskService::get(self, id).await
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task, DomainError> {
        TaskService::update(self, id, patch).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), DomainError> {
        TaskService::delete(self, id).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        TaskService::ping(self).await
    }
}

#[async_trait::async_trait]
impl<U: UsageStore + ?Sized + 'static> ApiKeyServiceTrait for ApiKeyService<U> {
    async fn verify_api_key(
        &self,
        credential: &str,
        client_address: &str,
    ) -> Result<ApiKeyIdentity, AuthError> {
        ApiKeyService::verify_api_key(self, credential, client_address).await
    }

    fn verify_admin_key(&self, credential: &str) -> Result<(), AuthError> {
        ApiKeyService::verify_admin_key(self, credential)
    }

    async fn usage_snapshot(&self) -> Result<Vec<(UsageKey, UsageRecord)>, DomainError> {
        ApiKeyService::usage_snapshot(self).await
    }
}
