//! Task CRUD endpoints

use axum::extract::State;
use validator::Validate;

use crate::api::middleware::RequireApiKey;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ApiErrorResponse, Json, ListTasksParams, MessageResponse, Path, Query, TaskCreate,
    TaskResponse, TaskUpdate,
};
use crate::domain::TaskId;

/// Page size of `GET /tasks/` when `limit` is omitted
pub const HTTP_DEFAULT_LIMIT: u32 = 20;

#[utoipa::path(
    post,
    path = "/tasks/",
    tag = "tasks",
    security(("bearer" = [])),
    request_body = TaskCreate,
    responses(
        (status = 200, description = "Task created", body = TaskResponse),
        (status = 401, description = "Invalid API key", body = ApiErrorResponse),
        (status = 403, description = "Missing credential", body = ApiErrorResponse),
        (status = 422, description = "Invalid payload", body = ApiErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    RequireApiKey(_identity): RequireApiKey,
    Json(body): Json<TaskCreate>,
) -> Result<Json<TaskResponse>, ApiError> {
    body.validate()?;

    let task = state.task_service.create(body.into()).await?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    get,
    path = "/tasks/",
    tag = "tasks",
    security(("bearer" = [])),
    params(ListTasksParams),
    responses(
        (status = 200, description = "Tasks in insertion order", body = [TaskResponse]),
        (status = 401, description = "Invalid API key", body = ApiErrorResponse),
        (status = 403, description = "Missing credential", body = ApiErrorResponse),
        (status = 422, description = "Invalid query", body = ApiErrorResponse)
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    RequireApiKey(_identity): RequireApiKey,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let limit = params.limit.unwrap_or(HTTP_DEFAULT_LIMIT);
    let tasks = state.task_service.list(params.skip, Some(limit)).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/tasks/{task_id}",
    tag = "tasks",
    security(("bearer" = [])),
    params(("task_id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 401, description = "Invalid API key", body = ApiErrorResponse),
        (status = 403, description = "Missing credential", body = ApiErrorResponse),
        (status = 404, description = "Task not found", body = ApiErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    RequireApiKey(_identity): RequireApiKey,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.task_service.get(TaskId::new(task_id)).await?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    put,
    path = "/tasks/{task_id}",
    tag = "tasks",
    security(("bearer" = [])),
    params(("task_id" = i64, Path, description = "Task id")),
    request_body = TaskUpdate,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 401, description = "Invalid API key", body = ApiErrorResponse),
        (status = 403, description = "Missing credential", body = ApiErrorResponse),
        (status = 404, description = "Task not found", body = ApiErrorResponse),
        (status = 422, description = "Invalid payload", body = ApiErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    RequireApiKey(_identity): RequireApiKey,
    Path(task_id): Path<i64>,
    Json(body): Json<TaskUpdate>,
) -> Result<Json<TaskResponse>, ApiError> {
    body.validate()?;

    let task = state
        .task_service
        .update(TaskId::new(task_id), body.into())
        .await?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    tag = "tasks",
    security(("bearer" = [])),
    params(("task_id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 401, description = "Invalid API key", body = ApiErrorResponse),
        (status = 403, description = "Missing credential", body = ApiErrorResponse),
        (status = 404, description = "Task not found", body = ApiErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    RequireApiKey(_identity): RequireApiKey,
    Path(task_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.task_service.delete(TaskId::new(task_id)).await?;

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
