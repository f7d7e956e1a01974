use station_server::config::ServerConfig;
use station_server::schedule::StationRegistry;
use station_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let registry = StationRegistry::new(config.stations.clone(), config.schedule.clone());

    let addr = config.addr;
    let stations: Vec<_> = registry.station_ids().into_iter().map(|s| s.as_str()).collect();
    info!(
        %addr,
        stations = %stations.join(","),
        min_gap_secs = registry.config().min_gap_secs,
        "Station scheduler listening"
    );
    info!("  POST /{{station}}/schedule_pass/            - Reserve a window");
    info!("  GET  /{{station}}/query_state_at/{{time}}     - Mode at an instant");
    info!("  GET  /{{station}}/query_busy_times/         - Busy windows in a range");
    info!("  GET  /{{station}}/reservations              - Full timeline");

    // Build app state
    let state = AppState::new(registry);

    // Create router
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
