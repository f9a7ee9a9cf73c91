//! Handlers for the `/activities` resource

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};
use loantrail_domain::{Activity, ActivityPatch, NewActivity};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /activities
///
/// Records a submitted activity. Validation failures come back as 422
/// naming every missing field; a same-day duplicate contact is accepted
/// with zero points rather than rejected.
async fn record(
    State(state): State<AppState>,
    Json(input): Json<NewActivity>,
) -> ApiResult<(StatusCode, Json<Activity>)> {
    let activity = state.activities.record_activity(input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// PATCH /activities/{id}
///
/// Applies a partial update; points and identity fields are immutable.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ActivityPatch>,
) -> ApiResult<Json<Activity>> {
    let activity = state.activities.update_activity(&id, &patch).await?;
    Ok(Json(activity))
}

/// Mount the activity routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", post(record))
        .route("/activities/{id}", patch(update))
}
