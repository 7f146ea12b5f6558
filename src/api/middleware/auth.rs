//! API key authentication middleware

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::ApiKeyIdentity;

/// Detail returned when no usable bearer credential is present
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Client address used when the connection info is unavailable
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extractor that requires a valid API key of any tier
///
/// The key is read from `Authorization: Bearer <api_key>`. A missing header
/// or another scheme is rejected with 403, a key that matches no tier with 401.
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub ApiKeyIdentity);

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = extract_bearer_credential(&parts.headers)?;
        let client_address = client_address(parts);

        debug!(client = %client_address, "Validating API key");

        let identity = state
            .api_key_service
            .verify_api_key(&credential, &client_address)
            .await?;

        Ok(RequireApiKey(identity))
    }
}

/// Read the bearer credential from the Authorization header.
/// The credential is taken verbatim after the first space.
pub(crate) fn extract_bearer_credential(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::forbidden(NOT_AUTHENTICATED))?;

    let (scheme, credential) = value
        .split_once(' ')
        .ok_or_else(|| ApiError::forbidden(NOT_AUTHENTICATED))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(ApiError::forbidden(NOT_AUTHENTICATED));
    }

    if credential.is_empty() {
        return Err(ApiError::forbidden(NOT_AUTHENTICATED));
    }

    Ok(credential.to_string())
}

/// Remote address of the caller, as seen by the listener
pub(crate) fn client_address(parts: &Parts) -> String {
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer demo-key".parse().unwrap());

        let result = extract_bearer_credential(&headers);
        assert_eq!(result.unwrap(), "demo-key");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "bearer demo-key".parse().unwrap());

        assert_eq!(extract_bearer_credential(&headers).unwrap(), "demo-key");
    }

    #[test]
    fn test_missing_header_is_forbidden() {
        let headers = HeaderMap::new();

        let err = extract_bearer_credential(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.response.detail, NOT_AUTHENTICATED);
    }

    #[test]
    fn test_other_scheme_is_forbidden() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        let err = extract_bearer_credential(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_empty_credential_is_forbidden() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());

        let err = extract_bearer_credential(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_credential_is_not_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer   ci-key  ".parse().unwrap());

        assert_eq!(extract_bearer_credential(&headers).unwrap(), "  ci-key  ");
    }

    #[test]
    fn test_client_address_from_connect_info() {
        let addr: SocketAddr = "192.0.2.7:5555".parse().unwrap();
        let (mut parts, _) = Request::new(()).into_parts();
        parts.extensions.insert(ConnectInfo(addr));

        assert_eq!(client_address(&parts), "192.0.2.7");
    }

    #[test]
    fn test_client_address_unknown_without_connect_info() {
        let (parts, _) = Request::new(()).into_parts();

        assert_eq!(client_address(&parts), UNKNOWN_CLIENT);
    }
}
