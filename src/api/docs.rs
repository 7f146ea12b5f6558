//! OpenAPI document for the HTTP surface

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::admin::usage::{UsageEntryResponse, UsageReportResponse};
use super::health::{HealthResponse, ReadyResponse};
use super::root::{CurrentUserResponse, RootResponse};
use super::types::{
    ApiErrorResponse, ApiErrorType, MessageResponse, TaskCreate, TaskResponse, TaskUpdate,
};

/// Path the OpenAPI JSON is served from
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Management API",
        description = "Task CRUD guarded by bearer API keys, with an admin usage report"
    ),
    paths(
        super::health::health_check,
        super::health::ready_check,
        super::root::root,
        super::root::current_user,
        super::tasks::create_task,
        super::tasks::list_tasks,
        super::tasks::get_task,
        super::tasks::update_task,
        super::tasks::delete_task,
        super::admin::usage::usage_report,
    ),
    components(schemas(
        HealthResponse,
        ReadyResponse,
        RootResponse,
        CurrentUserResponse,
        TaskCreate,
        TaskUpdate,
        TaskResponse,
        MessageResponse,
        UsageEntryResponse,
        UsageReportResponse,
        ApiErrorResponse,
        ApiErrorType,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "general", description = "Caller information"),
        (name = "tasks", description = "Task management"),
        (name = "admin", description = "Admin-only reporting")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by the paths
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
