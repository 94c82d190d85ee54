use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transit_server::catalog::TransitSource;
use transit_server::config::AppConfig;
use transit_server::mbta::{MbtaClient, MockMbtaClient};
use transit_server::planner::TransitPlanner;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    match config.mock_data_dir.clone() {
        Some(dir) => {
            let source = MockMbtaClient::new(&dir).expect("Failed to load mock MBTA data");
            info!(
                dir = %dir.display(),
                stop_files = source.available_routes().len(),
                "Using mock MBTA data"
            );
            serve(source, config).await;
        }
        None => {
            if config.mbta.api_key.is_none() {
                warn!("MBTA_API_KEY not set; requests are heavily rate-limited");
            }
            let client =
                MbtaClient::new(config.mbta.clone()).expect("Failed to create MBTA client");
            info!(base_url = %config.mbta.base_url, "Using MBTA v3 API");
            serve(client, config).await;
        }
    }
}

async fn serve<S: TransitSource + 'static>(source: S, config: AppConfig) {
    let planner = TransitPlanner::new(Arc::new(source), &config.catalog, config.planner);
    let app = create_router(AppState::new(planner));

    let addr: SocketAddr = config.bind_addr;
    info!("Transit Line Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health  - Health check");
    info!("  GET  /routes  - Route summary (?types=0,1)");
    info!("  GET  /plan    - Plan a journey (?from=..&to=..&mode=graph|links&types=..)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
