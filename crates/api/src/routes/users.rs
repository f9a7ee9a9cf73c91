//! Handlers for the `/users/{id}` resource

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use loantrail_domain::{Activity, DailyProgress, LoanTrailError, StreakSummary, UserProfile};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Optional external token pair accepted as a profile lookup fallback
#[derive(Deserialize)]
struct ExternalIdsQuery {
    external_user_id: Option<String>,
    external_location_id: Option<String>,
}

/// GET /users/{id}/profile
///
/// Looks the profile up by internal id first. When that misses and both
/// external id query parameters are present, retries with the external
/// token pair.
async fn profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExternalIdsQuery>,
) -> ApiResult<Json<UserProfile>> {
    match state.activities.profile(&id).await {
        Ok(profile) => Ok(Json(profile)),
        Err(LoanTrailError::NotFound(_)) => {
            if let (Some(user), Some(location)) =
                (&query.external_user_id, &query.external_location_id)
            {
                let profile = state.activities.profile_by_external_ids(user, location).await?;
                return Ok(Json(profile));
            }
            Err(LoanTrailError::NotFound(format!("user profile {id}")).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /users/{id}/activities
async fn activities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Activity>>> {
    let history = state.activities.activities_for_user(&id).await?;
    Ok(Json(history))
}

/// Signed point adjustment
#[derive(Deserialize)]
struct PointsRequest {
    delta: i64,
}

/// POST /users/{id}/points
///
/// Applies a signed delta to the running total; the total floors at zero
/// and the status tier is re-resolved.
async fn award_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PointsRequest>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.activities.award_points(&id, request.delta).await?;
    Ok(Json(profile))
}

/// POST /users/{id}/streak/recompute
///
/// Rederives the streak quadruple from the user's full history.
async fn recompute_streak(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StreakSummary>> {
    let summary = state.activities.refresh_streak(&id).await?;
    Ok(Json(summary))
}

/// Date selector for progress queries; defaults to the current UTC date
#[derive(Deserialize)]
struct ProgressQuery {
    date: Option<NaiveDate>,
}

/// GET /users/{id}/progress?date=YYYY-MM-DD
async fn daily_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ProgressQuery>,
) -> ApiResult<Json<DailyProgress>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let progress = state.activities.daily_progress(&id, date).await?;
    Ok(Json(progress))
}

/// Mount the user routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/profile", get(profile))
        .route("/users/{id}/activities", get(activities))
        .route("/users/{id}/points", post(award_points))
        .route("/users/{id}/streak/recompute", post(recompute_streak))
        .route("/users/{id}/progress", get(daily_progress))
}
