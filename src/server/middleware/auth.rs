use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Rejects requests that do not carry a valid bearer token.
///
/// On success the token's `Claims` are inserted into the request extensions. In the
/// test environment the check is skipped entirely.
///
/// # Returns
/// - `401 Unauthorized` - Header missing, not a bearer token, or token invalid
/// - `500 Internal Server Error` - Signing keys unavailable or no verifier configured
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if state.environment.bypasses_auth() {
        return Ok(next.run(request).await);
    }

    let Some(verifier) = state.verifier.as_ref() else {
        return Err(AuthError::KeySetUnavailable("no token verifier configured".to_string()).into());
    };

    let token = bearer_token(request.headers())?;
    let claims = verifier.verify(token).await?;

    tracing::debug!("Authenticated request for subject {}", claims.sub);

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingToken);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?
        .trim();

    if value.is_empty() {
        return Err(AuthError::MissingToken);
    }

    match value.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken(
            "authorization header is not a bearer token".to_string(),
        )),
    }
}
