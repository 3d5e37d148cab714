//! Bearer token verification against an OpenID identity provider.
//!
//! `TokenVerifier` checks signature, algorithm, issuer, audience and expiry of a JWT.
//! Signing keys come from a `KeySource`; in production that is the provider's JWKS
//! document, fetched and cached by `JwksKeySource`.

pub mod key_source;


use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::error::auth::AuthError;

pub use key_source::{JwksKeySource, KeySource, StaticKeySource};

/// `aud` may be a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Claims of a validated access token, made available to handlers through request
/// extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: Audience,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Clone)]
pub struct TokenVerifier {
    issuer: Url,
    audience: String,
    algorithms: Vec<Algorithm>,
    keys: Arc<dyn KeySource>,
}

impl TokenVerifier {
    /// Creates a verifier accepting RS256 tokens from `issuer` for `audience`.
    pub fn new(issuer: Url, audience: impl Into<String>, keys: Arc<dyn KeySource>) -> Self {
        Self {
            issuer,
            audience: audience.into(),
            algorithms: vec![Algorithm::RS256],
            keys,
        }
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Validates a raw bearer token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is signed by a known key and all claim checks pass
    /// - `Err(AuthError::InvalidToken)` - Malformed, wrongly signed, expired, or for
    ///   another issuer or audience
    /// - `Err(AuthError::KeySetUnavailable)` - Signing keys could not be loaded
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if !self.algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidToken(format!(
                "algorithm {:?} is not accepted",
                header.alg
            )));
        }

        let key = self.keys.decoding_key(header.kid.as_deref()).await?;

        let mut validation = Validation::new(header.alg);
        validation.algorithms = self.algorithms.clone();
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);

        let data = decode::<Claims>(token, &key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }
}
