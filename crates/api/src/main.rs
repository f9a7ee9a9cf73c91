//! LoanTrail server binary
//!
//! Wires the record-store repositories, core services, and snapshot
//! scheduler together and serves the HTTP API.

use std::net::SocketAddr;
use std::sync::Arc;

use loantrail_core::{ActivityService, LeaderboardService, UserProfileRepository};
use loantrail_infra::{
    CachedUserProfileRepository, RecordStoreClient, SnapshotScheduler, SnapshotSchedulerConfig,
    StoreActivityRepository, StoreLeaderboardRepository, StoreUserProfileRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loantrail_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loantrail=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = loantrail_infra::config::load().expect("Failed to load configuration");
    tracing::info!(host = %config.server.host, port = config.server.port, "Loaded configuration");

    let client = Arc::new(
        RecordStoreClient::new(&config.store).expect("Failed to build record-store client"),
    );

    let activity_repo = Arc::new(StoreActivityRepository::new(Arc::clone(&client)));
    let profile_repo: Arc<dyn UserProfileRepository> = Arc::new(CachedUserProfileRepository::new(
        Arc::new(StoreUserProfileRepository::new(Arc::clone(&client))),
        &config.cache,
    ));
    let leaderboard_repo = Arc::new(StoreLeaderboardRepository::new(Arc::clone(&client)));

    let activities = Arc::new(ActivityService::new(activity_repo, profile_repo));
    let leaderboard = Arc::new(LeaderboardService::new(leaderboard_repo));

    let mut scheduler = SnapshotScheduler::new(
        Arc::clone(&leaderboard),
        SnapshotSchedulerConfig::from(&config.scheduler),
    );
    if config.scheduler.enabled {
        scheduler.start().await.expect("Failed to start snapshot scheduler");
    } else {
        tracing::info!("Snapshot scheduler disabled by configuration");
    }

    let state = AppState { activities, leaderboard };
    let app = loantrail_api::app(state);

    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, cleaning up");

    if scheduler.is_running() {
        if let Err(err) = scheduler.stop().await {
            tracing::warn!(error = %err, "Snapshot scheduler did not stop cleanly");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
