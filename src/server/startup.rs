use std::{
    future::{Future, IntoFuture},
    sync::Arc,
    time::Duration,
};

use axum::Router;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::{net::TcpListener, sync::Notify};

use crate::server::{
    auth::{JwksKeySource, TokenVerifier},
    config::Config,
    error::AppError,
};

/// Time in-flight requests get to finish once shutdown has been requested.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Connects to the database and applies pending migrations.
///
/// Migrations run in a single transaction before the function returns, so the
/// server never serves requests against a partially migrated schema.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let applied = Migrator::up(&db).await?;
    tracing::info!("Database ready, {} migration(s) applied", applied.len());

    Ok(db)
}

/// Builds the bearer token verifier for the configured identity provider.
///
/// Returns `None` when no provider is configured, which configuration only allows in
/// the test environment.
pub fn build_token_verifier(config: &Config) -> Result<Option<TokenVerifier>, AppError> {
    let Some(auth) = config.auth.as_ref() else {
        tracing::info!("No identity provider configured, bearer tokens are not checked");
        return Ok(None);
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    let keys = JwksKeySource::new(client, &auth.issuer)?;

    Ok(Some(TokenVerifier::new(
        auth.issuer.clone(),
        auth.audience.clone(),
        Arc::new(keys),
    )))
}

/// Serves `app` until a shutdown signal arrives.
///
/// After the signal the listener stops accepting connections and in-flight requests
/// get `SHUTDOWN_GRACE_PERIOD` to complete before they are abandoned.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    serve_until(listener, app, shutdown_signal(), SHUTDOWN_GRACE_PERIOD).await
}

pub(crate) async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace_period: Duration,
) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown = Arc::new(Notify::new());
    let notifier = shutdown.clone();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            tracing::info!("Shutdown signal received, draining connections");
            notifier.notify_one();
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        _ = async {
            shutdown.notified().await;
            tokio::time::sleep(grace_period).await;
        } => {
            tracing::warn!(
                "In-flight requests did not finish within {}s, abandoning them",
                grace_period.as_secs()
            );
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
