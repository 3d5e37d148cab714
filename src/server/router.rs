use axum::{middleware::from_fn_with_state, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{comment, health, project, task, team, user},
    middleware::auth::require_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project Management API",
        description = "Projects, tasks, teams, users and comments"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "User management"),
        (name = "project", description = "Projects and their members"),
        (name = "task", description = "Tasks within projects"),
        (name = "team", description = "Teams and their members"),
        (name = "comment", description = "Comments on tasks"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Every `/api/v1` route sits behind `require_auth`. `/health` and the Swagger UI
/// at `/swagger-ui` are public.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::delete_user))
        .routes(routes!(project::create_project, project::get_projects))
        .routes(routes!(
            project::get_project,
            project::update_project,
            project::delete_project
        ))
        .routes(routes!(project::get_project_tasks))
        .routes(routes!(
            project::add_project_user,
            project::remove_project_user
        ))
        .routes(routes!(task::create_task, task::get_tasks))
        .routes(routes!(task::get_task, task::update_task, task::delete_task))
        .routes(routes!(team::create_team, team::get_teams))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::add_team_user, team::remove_team_user))
        .routes(routes!(comment::create_comment, comment::get_comments))
        .routes(routes!(comment::get_comment, comment::delete_comment))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
