use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        task::{CreateTaskDto, TaskDetailDto, TaskDto, UpdateTaskDto},
    },
    server::{
        controller::param::TaskListQuery,
        error::AppError,
        model::task::{Task, TaskParams},
        service::task::TaskService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Create a task.
///
/// # Returns
/// - `201 Created` - Task created
/// - `400 Bad Request` - Empty title, missing project, unknown project or assignee
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TaskService::new(&state.db);

    let task = service.create(TaskParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get a page of tasks, optionally only those of one project.
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = TASK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("project_id" = Option<i32>, Query, description = "Only tasks of this project")
    ),
    responses(
        (status = 200, description = "Page of tasks", body = PageDto<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TaskListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TaskService::new(&state.db);

    let project_id = query.project_id();
    let page = service
        .get_paginated(query.pagination.into_page_request(), project_id)
        .await?;

    Ok(Json(page.into_dto(Task::into_dto)))
}

/// Get a task with its project and assignee.
#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = TaskDetailDto),
        (status = 400, description = "Invalid task ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TaskService::new(&state.db);

    let task = service.get_by_id(id).await?;

    Ok(Json(task.into_dto()))
}

/// Replace every field of a task.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TaskService::new(&state.db);

    let task = service.update(id, TaskParams::from(payload)).await?;

    Ok(Json(task.into_dto()))
}

/// Soft-delete a task.
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = MessageDto),
        (status = 400, description = "Invalid task ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TaskService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MessageDto::new("task deleted successfully")))
}
