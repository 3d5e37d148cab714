use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::{CommentDetailDto, CommentDto, CreateCommentDto},
        pagination::PageDto,
    },
    server::{
        controller::param::CommentListQuery,
        error::AppError,
        model::comment::{Comment, CreateCommentParams},
        service::comment::CommentService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Create a comment on a task.
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (
            status = 400,
            description = "Invalid comment data, unknown task or author",
            body = ErrorDto
        ),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comment = service.create(CreateCommentParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get a page of comments, optionally only those of one task.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    tag = COMMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("task_id" = Option<i32>, Query, description = "Only comments on this task")
    ),
    responses(
        (status = 200, description = "Page of comments", body = PageDto<CommentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CommentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let task_id = query.task_id();
    let page = service
        .get_paginated(query.pagination.into_page_request(), task_id)
        .await?;

    Ok(Json(page.into_dto(Comment::into_dto)))
}

/// Get a comment with its task and author.
#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment found", body = CommentDetailDto),
        (status = 400, description = "Invalid comment ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comment = service.get_by_id(id).await?;

    Ok(Json(comment.into_dto()))
}

/// Soft-delete a comment.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 400, description = "Invalid comment ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MessageDto::new("comment deleted successfully")))
}
