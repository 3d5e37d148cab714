use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        project::{CreateProjectDto, ProjectDto, ProjectSummaryDto, UpdateProjectDto},
        task::TaskDto,
    },
    server::{
        controller::param::PaginationQuery,
        error::AppError,
        model::{
            project::{Project, ProjectParams},
            task::Task,
        },
        service::project::ProjectService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Create a project.
///
/// # Returns
/// - `201 Created` - Project created, with empty users, tasks and teams
/// - `400 Bad Request` - Name shorter than 3 characters or malformed body
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service.create(ProjectParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// Get a page of projects.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = PROJECT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of projects", body = PageDto<ProjectSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let page = service.get_paginated(query.into_page_request()).await?;

    Ok(Json(page.into_dto(Project::into_summary_dto)))
}

/// Get a project with its members, tasks and teams.
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = ProjectDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service.get_by_id(id).await?;

    Ok(Json(project.into_dto()))
}

/// Replace every field of a project.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service.update(id, ProjectParams::from(payload)).await?;

    Ok(Json(project.into_dto()))
}

/// Soft-delete a project.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MessageDto::new("project deleted successfully")))
}

/// Get every task of a project.
#[utoipa::path(
    get,
    path = "/api/v1/projects/{project_id}/tasks",
    tag = PROJECT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Tasks of the project", body = Vec<TaskDto>),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_project_tasks(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let tasks = service.get_tasks(project_id).await?;

    Ok(Json(
        tasks.into_iter().map(Task::into_dto).collect::<Vec<_>>(),
    ))
}

/// Add a user to a project.
///
/// Adding a user that is already a member succeeds without changes.
#[utoipa::path(
    post,
    path = "/api/v1/projects/{project_id}/users/{user_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User is a member of the project"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_project_user(
    State(state): State<AppState>,
    ApiPath((project_id, user_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    service.add_user(project_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a user from a project.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{project_id}/users/{user_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User removed from the project"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Project, user or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_project_user(
    State(state): State<AppState>,
    ApiPath((project_id, user_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    service.remove_user(project_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
