use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied with a protected request.
    #[error("Missing authentication token")]
    MissingToken,

    /// The token could not be parsed, has a bad signature, or failed issuer,
    /// audience or expiry checks.
    #[error("Invalid authentication token: {0}")]
    InvalidToken(String),

    /// The signing keys could not be obtained from the identity provider, or
    /// authentication is not configured at all.
    #[error("Token validator unavailable: {0}")]
    KeySetUnavailable(String),
}

/// Converts authentication errors into HTTP responses.
///
/// The reason behind a rejected token is logged at debug level only; the client
/// receives a fixed message.
///
/// # Returns
/// - 401 Unauthorized - For missing or invalid tokens
/// - 500 Internal Server Error - When keys cannot be fetched
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Missing authentication token")),
            )
                .into_response(),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected bearer token: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Invalid authentication token")),
                )
                    .into_response()
            }
            Self::KeySetUnavailable(reason) => {
                tracing::error!("Token validator unavailable: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Token validator unavailable")),
                )
                    .into_response()
            }
        }
    }
}
