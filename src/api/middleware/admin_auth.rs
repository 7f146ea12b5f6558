//! Admin authentication middleware
//!
//! Only the configured admin key is accepted. Both a missing credential and
//! a wrong one are rejected with 403, and admin checks never count usage.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

use super::auth::{client_address, extract_bearer_credential};

/// Extractor that requires the admin key
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = extract_bearer_credential(&parts.headers)?;

        state.api_key_service.verify_admin_key(&credential)?;

        debug!(client = %client_address(parts), "Admin access granted");
        Ok(RequireAdmin)
    }
}
