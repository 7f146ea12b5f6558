//! HTTP router assembly

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;

use super::admin;
use super::docs::{ApiDoc, OPENAPI_PATH};
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::root::{self, DOCS_PATH};
use super::state::AppState;
use super::tasks;

/// Create the full router with application state
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Health endpoints (no auth)
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Caller information
        .route("/", get(root::root))
        .route("/me", get(root::current_user))
        // Task CRUD
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{task_id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        // Admin API
        .nest("/admin", admin::create_admin_router());

    if state.info.docs_enabled {
        info!("API docs enabled at {}", DOCS_PATH);
        router = router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    router
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer(&config.cors_origins()))
        .layer(TraceLayer::new_for_http())
}

/// Wildcard origins get a credential-less policy; an explicit origin list
/// allows credentials and mirrors the requested headers.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer =
        CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer
        .allow_origin(origins)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
