//! Port interfaces for activity recording and profile state
//!
//! These traits define the boundaries between core business logic
//! and the record-store implementations in infra.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use loantrail_domain::{Activity, ActivityPatch, ActivityType, Result, StreakSummary, UserProfile};

/// Trait for persisting and querying logged activities
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Persist a new activity; the store assigns id and timestamps.
    /// Returns the row as written.
    async fn insert(&self, activity: Activity) -> Result<Activity>;

    /// Fetch one activity by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Activity>>;

    /// Fetch a user's full activity history, any order
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Activity>>;

    /// Fetch a user's activities of one type within a day's bounds
    /// (both bounds inclusive)
    async fn find_contacts_on_day(
        &self,
        user_id: &str,
        activity_type: &ActivityType,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<Activity>>;

    /// Apply a partial update; returns the row as written
    async fn update(&self, id: &str, patch: &ActivityPatch) -> Result<Activity>;
}

/// Trait for user profile persistence and retrieval
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Get user profile by internal id
    async fn get_by_id(&self, id: &str) -> Result<Option<UserProfile>>;

    /// Get user profile by the external user/location token pair
    async fn get_by_external_ids(
        &self,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<Option<UserProfile>>;

    /// Write a new points total and its matching status tier in one update
    async fn update_points(
        &self,
        id: &str,
        total_points: i64,
        status_level: loantrail_domain::StatusLevel,
    ) -> Result<UserProfile>;

    /// Write the streak quadruple in one update
    async fn update_streak(&self, id: &str, streak: &StreakSummary) -> Result<UserProfile>;
}
