use std::sync::Arc;

use steps_leaderboard_api::api::{self, SharedRegistry};
use steps_leaderboard_api::config::AppConfig;
use steps_leaderboard_api::infrastructure::logging::init_logging;
use steps_leaderboard_api::infrastructure::repositories::InMemoryTeamRepository;
use tokio::signal;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Initialize tracing
    init_logging(&config.log_level);

    let registry: SharedRegistry = Arc::new(InMemoryTeamRepository::new());
    let app = api::router(registry);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");

    tracing::info!("Server shutdown complete");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
