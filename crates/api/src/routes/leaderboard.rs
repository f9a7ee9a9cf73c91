//! Handlers for the `/leaderboard` resource

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use loantrail_domain::{LeaderboardEntry, LeaderboardSnapshot, DEFAULT_LEADERBOARD_SIZE};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
struct StandingsQuery {
    limit: Option<usize>,
}

/// GET /leaderboard?limit=N
async fn standings(
    State(state): State<AppState>,
    Query(query): Query<StandingsQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_SIZE);
    let entries = state.leaderboard.standings(limit).await?;
    Ok(Json(entries))
}

/// POST /leaderboard/snapshot
///
/// Captures a snapshot of the current standings outside the scheduled
/// interval.
async fn capture_snapshot(
    State(state): State<AppState>,
    Query(query): Query<StandingsQuery>,
) -> ApiResult<(StatusCode, Json<LeaderboardSnapshot>)> {
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_SIZE);
    let snapshot = state.leaderboard.capture_snapshot(limit).await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// Mount the leaderboard routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(standings))
        .route("/leaderboard/snapshot", post(capture_snapshot))
}
