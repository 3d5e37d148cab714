use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{jwk::JwkSet, DecodingKey};
use tokio::sync::RwLock;
use url::Url;

use crate::server::error::auth::AuthError;

/// How long a fetched key set is trusted before it is fetched again.
pub const JWKS_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Shortest gap between two refreshes triggered by an unknown `kid`.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Supplies the key used to check a token's signature.
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Returns the decoding key for the token's `kid` header, if any.
    async fn decoding_key(&self, kid: Option<&str>) -> Result<DecodingKey, AuthError>;
}

/// Single fixed key, used when the signing key is known up front.
pub struct StaticKeySource(pub DecodingKey);

#[async_trait]
impl KeySource for StaticKeySource {
    async fn decoding_key(&self, _kid: Option<&str>) -> Result<DecodingKey, AuthError> {
        Ok(self.0.clone())
    }
}

/// Retrieves the published key set.
#[async_trait]
pub trait KeySetFetcher: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, AuthError>;
}

/// Fetches the key set over HTTP.
pub struct HttpKeySetFetcher {
    client: reqwest::Client,
    url: Url,
}

#[async_trait]
impl KeySetFetcher for HttpKeySetFetcher {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!("Fetching signing keys from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
    }
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Keys published at `{issuer}.well-known/jwks.json`.
///
/// The set is cached for `JWKS_CACHE_TTL`. A `kid` that is not in the cached set
/// forces a refresh before the token is rejected, so key rotation is picked up
/// without waiting for expiry. Forced refreshes happen at most once per
/// `MIN_REFRESH_INTERVAL`, and only one fetch runs at a time.
pub struct JwksKeySource {
    fetcher: Box<dyn KeySetFetcher>,
    ttl: Duration,
    min_refresh_interval: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl JwksKeySource {
    pub fn new(client: reqwest::Client, issuer: &Url) -> Result<Self, AuthError> {
        let url = jwks_url(issuer)?;

        Ok(Self::with_fetcher(HttpKeySetFetcher { client, url }))
    }

    pub fn with_fetcher(fetcher: impl KeySetFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            ttl: JWKS_CACHE_TTL,
            min_refresh_interval: MIN_REFRESH_INTERVAL,
            cache: RwLock::new(None),
        }
    }

    /// Returns the cached key set, fetching it when missing or stale. With `force`
    /// the set is refetched unless it was fetched within the minimum interval.
    async fn key_set(&self, force: bool) -> Result<JwkSet, AuthError> {
        let max_age = if force {
            self.min_refresh_interval
        } else {
            self.ttl
        };

        if let Some(keys) = cached_within(self.cache.read().await.as_ref(), max_age) {
            return Ok(keys);
        }

        // Checked again under the write lock: a concurrent caller may have refreshed.
        let mut cache = self.cache.write().await;
        if let Some(keys) = cached_within(cache.as_ref(), max_age) {
            return Ok(keys);
        }

        let keys = self.fetcher.fetch().await?;
        *cache = Some(CachedKeys {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }
}

fn jwks_url(issuer: &Url) -> Result<Url, AuthError> {
    issuer
        .join(".well-known/jwks.json")
        .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
}

fn cached_within(cached: Option<&CachedKeys>, max_age: Duration) -> Option<JwkSet> {
    cached
        .filter(|cached| cached.fetched_at.elapsed() < max_age)
        .map(|cached| cached.keys.clone())
}

fn select_key(keys: &JwkSet, kid: Option<&str>) -> Option<Result<DecodingKey, AuthError>> {
    let jwk = match kid {
        Some(kid) => keys.find(kid)?,
        None if keys.keys.len() == 1 => &keys.keys[0],
        None => return None,
    };

    Some(DecodingKey::from_jwk(jwk).map_err(|e| AuthError::KeySetUnavailable(e.to_string())))
}

#[async_trait]
impl KeySource for JwksKeySource {
    async fn decoding_key(&self, kid: Option<&str>) -> Result<DecodingKey, AuthError> {
        let keys = self.key_set(false).await?;
        if let Some(key) = select_key(&keys, kid) {
            return key;
        }

        let keys = self.key_set(true).await?;
        match select_key(&keys, kid) {
            Some(key) => key,
            None => Err(AuthError::InvalidToken(format!(
                "no signing key matches kid {:?}",
                kid
            ))),
        }
    }
}
