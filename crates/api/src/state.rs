//! Shared application state

use std::sync::Arc;

use loantrail_core::{ActivityService, LeaderboardService};

/// State available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable; the services are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Activity recording and profile orchestration
    pub activities: Arc<ActivityService>,
    /// Leaderboard ranking and snapshot capture
    pub leaderboard: Arc<LeaderboardService>,
}
