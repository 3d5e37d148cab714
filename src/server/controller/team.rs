use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        team::{CreateTeamDto, TeamDto, TeamSummaryDto, UpdateTeamDto},
    },
    server::{
        controller::param::PaginationQuery,
        error::AppError,
        model::team::{Team, TeamParams},
        service::team::TeamService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Create a team, optionally attached to a project.
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown project", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let team = service.create(TeamParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Get a page of teams.
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of teams", body = PageDto<TeamSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let page = service.get_paginated(query.into_page_request()).await?;

    Ok(Json(page.into_dto(Team::into_summary_dto)))
}

/// Get a team with its project and members.
#[utoipa::path(
    get,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 400, description = "Invalid team ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_team(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let team = service.get_by_id(id).await?;

    Ok(Json(team.into_dto()))
}

/// Replace every field of a team.
#[utoipa::path(
    put,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown project", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let team = service.update(id, TeamParams::from(payload)).await?;

    Ok(Json(team.into_dto()))
}

/// Soft-delete a team.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 400, description = "Invalid team ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MessageDto::new("team deleted successfully")))
}

/// Add a user to a team.
#[utoipa::path(
    post,
    path = "/api/v1/teams/{team_id}/users/{user_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User is a member of the team"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_team_user(
    State(state): State<AppState>,
    ApiPath((team_id, user_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    service.add_user(team_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a user from a team.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/users/{user_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User removed from the team"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team, user or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_team_user(
    State(state): State<AppState>,
    ApiPath((team_id, user_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    service.remove_user(team_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
