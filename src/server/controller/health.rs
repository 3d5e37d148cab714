use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::AppError, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Reports whether the server can reach its database.
///
/// # Returns
/// - `200 OK` - Database answered a ping
/// - `500 Internal Server Error` - Database unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server and database are reachable", body = MessageDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok(Json(MessageDto::new("healthy")))
}
