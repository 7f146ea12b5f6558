//! Authenticated service root and caller introspection

use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::middleware::RequireApiKey;
use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::CurrentUser;

/// Path of the Swagger UI when docs are enabled
pub const DOCS_PATH: &str = "/docs";

/// Body of `GET /`
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub docs_url: String,
    /// Tier of the key used for this request
    pub api_key_type: String,
}

/// Body of `GET /me`
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    /// Tier of the key used for this request
    pub user_type: String,
    pub ip_address: String,
    pub authenticated: bool,
}

impl From<CurrentUser> for CurrentUserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            user_type: user.user_type.to_string(),
            ip_address: user.ip_address,
            authenticated: user.authenticated,
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller is authenticated", body = RootResponse),
        (status = 401, description = "Invalid API key", body = crate::api::types::ApiErrorResponse),
        (status = 403, description = "Missing credential", body = crate::api::types::ApiErrorResponse)
    )
)]
pub async fn root(
    State(state): State<AppState>,
    RequireApiKey(identity): RequireApiKey,
) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Task Management API".to_string(),
        status: "authenticated".to_string(),
        docs_url: if state.info.docs_enabled {
            DOCS_PATH.to_string()
        } else {
            "disabled".to_string()
        },
        api_key_type: identity.tier.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "general",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller identity", body = CurrentUserResponse),
        (status = 401, description = "Invalid API key", body = crate::api::types::ApiErrorResponse),
        (status = 403, description = "Missing credential", body = crate::api::types::ApiErrorResponse)
    )
)]
pub async fn current_user(RequireApiKey(identity): RequireApiKey) -> Json<CurrentUserResponse> {
    Json(identity.current_user().into())
}
