//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::{auth::TokenVerifier, config::Environment};

/// Application state containing shared resources.
///
/// Cloned for each request via Axum's state extraction; every field is cheap to
/// clone (`DatabaseConnection` is a pool handle, `TokenVerifier` holds an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Environment the server runs in. Decides whether bearer tokens are checked.
    pub environment: Environment,

    /// Validator for bearer tokens. `None` when no identity provider is configured,
    /// which is only allowed in the test environment.
    pub verifier: Option<TokenVerifier>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        environment: Environment,
        verifier: Option<TokenVerifier>,
    ) -> Self {
        Self {
            db,
            environment,
            verifier,
        }
    }
}
