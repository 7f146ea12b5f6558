//! Usage report admin endpoint

use std::collections::BTreeMap;

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Json};
use crate::domain::usage::{UsageKey, UsageRecord};

/// Label identifying the report as an admin-only view
pub const ADMIN_ONLY: &str = "admin_only";

/// Counter for one `"<address>:<tier>"` key
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsageEntryResponse {
    pub count: u64,
    pub first_used: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

impl From<UsageRecord> for UsageEntryResponse {
    fn from(record: UsageRecord) -> Self {
        Self {
            count: record.count,
            first_used: record.first_used,
            last_used: record.last_used,
        }
    }
}

/// Body of `GET /admin/usage`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsageReportResponse {
    pub total_usage: BTreeMap<String, UsageEntryResponse>,
    pub active_sessions: usize,
    pub endpoint: String,
}

impl UsageReportResponse {
    pub fn from_snapshot(snapshot: Vec<(UsageKey, UsageRecord)>) -> Self {
        let total_usage: BTreeMap<_, _> = snapshot
            .into_iter()
            .map(|(key, record)| (key.to_string(), record.into()))
            .collect();

        Self {
            active_sessions: total_usage.len(),
            total_usage,
            endpoint: ADMIN_ONLY.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/usage",
    tag = "admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Usage counters since process start", body = UsageReportResponse),
        (status = 403, description = "Missing or non-admin key", body = ApiErrorResponse)
    )
)]
pub async fn usage_report(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<UsageReportResponse>, ApiError> {
    let snapshot = state.api_key_service.usage_snapshot().await?;

    Ok(Json(UsageReportResponse::from_snapshot(snapshot)))
}
