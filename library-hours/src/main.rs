use std::process::ExitCode;

use library_hours::board::StatusBoard;
use library_hours::config::{ConfigError, HostConfig};
use library_hours::libcal::{FetchError, FixtureError, FixtureSource, HoursClient};
use library_hours::refresh;
use library_hours::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to create hours client: {0}")]
    Client(#[from] FetchError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging (set RUST_LOG=library_hours=debug for more output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("library_hours=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "library-hours stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = HostConfig::from_env()?;
    let board = StatusBoard::new();

    // Spawn background task to refresh hours
    match &config.fixture {
        Some(path) => {
            let source = FixtureSource::from_path(path)?;
            info!(path = %path.display(), "serving hours from fixture");
            tokio::spawn(refresh::run(
                source,
                board.clone(),
                config.refresh_interval,
                config.timeout,
            ));
        }
        None => {
            let client = HoursClient::new(config.hours_config())?;
            info!(url = client.url(), "serving hours from feed");
            tokio::spawn(refresh::run(
                client,
                board.clone(),
                config.refresh_interval,
                config.timeout,
            ));
        }
    }

    let app = create_router(AppState::new(board));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(
        addr = %config.addr,
        refresh_secs = config.refresh_interval.as_secs(),
        "library hours listening"
    );
    info!("  GET  /                     - Status page");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/status           - All libraries");
    info!("  GET  /api/status/:library  - One library");
    info!("  GET  /api/widget/:library  - Hourly widget timeline");

    axum::serve(listener, app).await?;
    Ok(())
}
