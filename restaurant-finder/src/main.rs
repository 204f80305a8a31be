use std::process::ExitCode;
use std::sync::Arc;

use restaurant_finder::config::AppConfig;
use restaurant_finder::finder::{FinderClient, MockFinderClient, RestaurantSource};
use restaurant_finder::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Pick the restaurant source
    let source: Arc<dyn RestaurantSource> = match &config.mock_data {
        Some(path) => match MockFinderClient::from_file(path) {
            Ok(mock) => {
                warn!(
                    path = %path.display(),
                    restaurants = mock.len(),
                    "serving mock data instead of the filter API"
                );
                Arc::new(mock)
            }
            Err(e) => {
                error!("failed to load mock data: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => match FinderClient::new(config.finder.clone()) {
            Ok(client) => {
                info!(url = %config.finder.filter_url(), "using restaurant filter API");
                Arc::new(client)
            }
            Err(e) => {
                error!("failed to create finder client: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let app = create_router(AppState::new(source), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.bind);
            return ExitCode::FAILURE;
        }
    };

    info!("Restaurant Finder listening on http://{}", config.bind);
    info!("  GET  /         - Search form");
    info!("  GET  /health   - Health check");
    info!("  POST /search   - Run a search");
    info!("  GET  /results  - Page through results");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
