mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

const DEFAULT_LOG_FILTER: &str = "project_management_api=debug,tower_http=debug,migration=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Starting server in {} environment", config.environment);

    let db = startup::connect_to_database(&config).await?;
    let verifier = startup::build_token_verifier(&config)?;

    let app = router::router(AppState::new(db, config.environment, verifier));

    let listener = TcpListener::bind(&config.address).await?;
    tracing::info!("Listening on {}", config.address);

    startup::serve(listener, app).await?;

    tracing::info!("Server stopped");

    Ok(())
}
