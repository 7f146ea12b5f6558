//! Request/response logging middleware with credential redaction

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware to log HTTP requests and responses.
/// Note: `TraceLayer` already opens the request span, so none is created here.
///
/// The request id is taken from `x-request-id` when the client sends one and
/// echoed back on the response.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(request.headers());
    let headers_log = redact_headers(request.headers());

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let status = response.status();
    let duration = start.elapsed();

    if matches!(status.as_u16(), 401 | 403) {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            request_id = %request_id,
            "Request rejected by authentication"
        );
    }

    info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        request_id = %request_id,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render the loggable headers, masking credentials
fn redact_headers(headers: &HeaderMap) -> String {
    let mut parts = Vec::new();

    for (name, value) in headers {
        let name_str = name.as_str();
        if !should_log_header(name_str) {
            continue;
        }

        let value_str = if is_sensitive_header(name_str) {
            "[REDACTED]"
        } else {
            value.to_str().unwrap_or("[invalid]")
        };

        parts.push(format!("{}={}", name_str, value_str));
    }

    parts.join(", ")
}

/// Check if a header carries credentials
fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "x-api-key" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

/// Check if a header should be logged
fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "authorization"
            | "x-api-key"
    )
}
