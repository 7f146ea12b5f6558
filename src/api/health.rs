//! Health check endpoints for liveness and readiness checks

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::types::Json;

use super::state::AppState;

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub docs_enabled: bool,
}

/// Readiness response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.info.environment.as_str().to_string(),
        docs_enabled: state.info.docs_enabled,
    })
}

/// Readiness check - verifies the task store answers
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Task store reachable", body = ReadyResponse),
        (status = 503, description = "Task store unreachable", body = ReadyResponse)
    )
)]
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.task_service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready".to_string(),
                message: None,
            }),
        ),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "unavailable".to_string(),
                    message: Some("Task store unreachable".to_string()),
                }),
            )
        }
    }
}
