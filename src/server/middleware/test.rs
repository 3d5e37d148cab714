use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::from_fn_with_state,
    extract::Request as AxumRequest,
    routing::get,
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    auth::{Audience, Claims, StaticKeySource, TokenVerifier},
    config::Environment,
    middleware::auth::require_auth,
    state::AppState,
};

const SECRET: &[u8] = b"middleware-test-secret";
const ISSUER: &str = "https://tenant.example.com/";
const AUDIENCE: &str = "project-api";

async fn state(environment: Environment, with_verifier: bool) -> AppState {
    let verifier = with_verifier.then(|| {
        TokenVerifier::new(
            Url::parse(ISSUER).unwrap(),
            AUDIENCE,
            Arc::new(StaticKeySource(DecodingKey::from_secret(SECRET))),
        )
        .with_algorithms(vec![Algorithm::HS256])
    });

    let test = TestBuilder::new().build().await.unwrap();

    AppState::new(test.db.unwrap(), environment, verifier)
}

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/protected",
            get(|request: AxumRequest| async move {
                request
                    .extensions()
                    .get::<Claims>()
                    .map(|claims| claims.sub.clone())
                    .unwrap_or_default()
            }),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

fn token() -> String {
    let claims = Claims {
        sub: "auth0|tester".to_string(),
        iss: ISSUER.to_string(),
        aud: Audience::One(AUDIENCE.to_string()),
        exp: (Utc::now() + Duration::minutes(10)).timestamp(),
        iat: None,
        scope: None,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

async fn call(app: Router, authorization: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri("/protected");
    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn rejects_missing_header() {
    let (status, body) = call(app(state(Environment::Local, true).await), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Missing authentication token"));
}

#[tokio::test]
async fn rejects_non_bearer_scheme() {
    let (status, body) = call(
        app(state(Environment::Local, true).await),
        Some("Basic dXNlcjpwYXNz"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Invalid authentication token"));
}

#[tokio::test]
async fn rejects_forged_token() {
    let (status, _) = call(
        app(state(Environment::Production, true).await),
        Some("Bearer eyJhbGciOiJIUzI1NiJ9.e30.c2lnbmF0dXJl"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn passes_claims_to_handler() {
    let bearer = format!("Bearer {}", token());
    let (status, body) = call(app(state(Environment::Local, true).await), Some(&bearer)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "auth0|tester");
}

#[tokio::test]
async fn test_environment_skips_validation() {
    let (status, _) = call(app(state(Environment::Test, false).await), None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_verifier_is_an_internal_error() {
    let (status, body) = call(
        app(state(Environment::Production, false).await),
        Some("Bearer abc"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Token validator unavailable"));
}
