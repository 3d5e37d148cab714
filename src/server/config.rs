use std::{fmt, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ADDRESS: &str = "localhost:8080";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "password";
const DEFAULT_DB_NAME: &str = "project_management_system";
const DEFAULT_SSL_MODE: &str = "disable";

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Production,
}

impl Environment {
    /// Whether bearer token validation is skipped. Only the test environment does.
    pub fn bypasses_auth(self) -> bool {
        matches!(self, Environment::Test)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue {
                var: "ENVIRONMENT".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// Identity provider settings used to validate bearer tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Expected `iss` claim, always ending in `/`. The JWKS document lives below it.
    pub issuer: Url,
    /// Expected `aud` claim.
    pub audience: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,
    pub database_url: String,
    /// `None` only in the test environment when no provider is configured.
    pub auth: Option<AuthConfig>,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match var("ENVIRONMENT") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let address = var("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url(&var)?,
        };

        let auth = match (var("AUTH0_DOMAIN"), var("AUTH0_AUDIENCE")) {
            (Some(domain), Some(audience)) => Some(AuthConfig {
                issuer: issuer_url(&domain)?,
                audience,
            }),
            _ if environment.bypasses_auth() => None,
            (None, _) => return Err(ConfigError::MissingEnvVar("AUTH0_DOMAIN".to_string()).into()),
            (_, None) => {
                return Err(ConfigError::MissingEnvVar("AUTH0_AUDIENCE".to_string()).into())
            }
        };

        Ok(Self {
            address,
            database_url,
            auth,
            environment,
        })
    }
}

/// Assembles a Postgres connection URL from the individual `DB_*` variables.
fn postgres_url(var: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    let host = var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let port = match var("DB_PORT") {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "DB_PORT".to_string(),
                value,
            })?,
        None => DEFAULT_DB_PORT,
    };
    let user = var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string());
    let password = var("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string());
    let name = var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
    let ssl_mode = var("SSL_MODE").unwrap_or_else(|| DEFAULT_SSL_MODE.to_string());

    let invalid_host = || ConfigError::InvalidValue {
        var: "DB_HOST".to_string(),
        value: host.clone(),
    };

    let mut url = Url::parse(&format!("postgres://{}", host)).map_err(|_| invalid_host())?;
    url.set_port(Some(port)).map_err(|_| invalid_host())?;
    url.set_username(&user).map_err(|_| invalid_host())?;
    url.set_password(Some(&password))
        .map_err(|_| invalid_host())?;
    url.set_path(&name);
    url.query_pairs_mut().append_pair("sslmode", &ssl_mode);

    Ok(url.to_string())
}

/// Turns `AUTH0_DOMAIN` into the issuer URL, accepting bare hosts.
fn issuer_url(domain: &str) -> Result<Url, ConfigError> {
    let domain = domain.trim();
    let with_scheme = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };
    let normalized = format!("{}/", with_scheme.trim_end_matches('/'));

    let url = Url::parse(&normalized).map_err(|_| ConfigError::InvalidValue {
        var: "AUTH0_DOMAIN".to_string(),
        value: domain.to_string(),
    })?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "AUTH0_DOMAIN".to_string(),
            value: domain.to_string(),
        });
    }

    Ok(url)
}
