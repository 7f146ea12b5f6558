//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::infrastructure::api_key::AuthError;

/// Error categories surfaced to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    AuthenticationError,
    PermissionError,
    NotFoundError,
    ValidationError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ValidationError => write!(f, "validation_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Short human-readable message
    pub detail: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, detail: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                detail: detail.into(),
                error_type,
            },
        }
    }

    /// Credential present but not recognized
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, detail)
    }

    /// Credential missing or lacking privilege
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, detail)
    }

    /// Not found error
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, detail)
    }

    /// Request failed shape or type checks
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::ValidationError,
            detail,
        )
    }

    /// Internal server error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            detail,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::validation(message),
            other => {
                error!("Request failed: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidKey => Self::unauthorized(err.to_string()),
            AuthError::AdminRequired => Self::forbidden(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let detail = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(detail)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error_type, self.response.detail
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_error_statuses() {
        assert_eq!(ApiError::unauthorized("").status, StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("").status, StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::validation("").status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::not_found("Task 1 not found").into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.detail, "Task 1 not found");

        let api_err: ApiError = DomainError::validation("bad title").into();
        assert_eq!(api_err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_storage_details_are_not_echoed() {
        let api_err: ApiError = DomainError::storage("password=hunter2 host=db").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api_err.response.detail.contains("hunter2"));
    }

    #[test]
    fn test_auth_error_conversion() {
        let api_err: ApiError = AuthError::InvalidKey.into();
        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_err.response.detail, "Invalid API key");

        let api_err: ApiError = AuthError::AdminRequired.into();
        assert_eq!(api_err.status, StatusCode::FORBIDDEN);
        assert_eq!(api_err.response.detail, "Admin access required");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unauthorized("Invalid API key");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["detail"], "Invalid API key");
        assert_eq!(json["type"], "authentication_error");
    }
}
