//! Record-store implementation of the user profile repository

use async_trait::async_trait;
use chrono::Utc;
use loantrail_core::UserProfileRepository;
use loantrail_domain::{Result, StatusLevel, StreakSummary, UserProfile};
use serde_json::json;

use super::client::{Filter, RecordStoreClient};
use super::row_into;

const TABLE: &str = "user_profiles";

/// User profile repository backed by the hosted record store.
pub struct StoreUserProfileRepository {
    client: std::sync::Arc<RecordStoreClient>,
}

impl StoreUserProfileRepository {
    pub fn new(client: std::sync::Arc<RecordStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserProfileRepository for StoreUserProfileRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<UserProfile>> {
        let rows = self
            .client
            .select(TABLE, &[Filter::eq("id", id)], None, Some(1))
            .await?;
        rows.into_iter().next().map(row_into).transpose()
    }

    async fn get_by_external_ids(
        &self,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<Option<UserProfile>> {
        let filters = [
            Filter::eq("external_user_id", external_user_id),
            Filter::eq("external_location_id", external_location_id),
        ];
        let rows = self.client.select(TABLE, &filters, None, Some(1)).await?;
        rows.into_iter().next().map(row_into).transpose()
    }

    async fn update_points(
        &self,
        id: &str,
        total_points: i64,
        status_level: StatusLevel,
    ) -> Result<UserProfile> {
        let patch = json!({
            "total_points": total_points,
            "status_level": status_level,
            "updated_at": Utc::now().to_rfc3339(),
        });
        let written = self
            .client
            .update(TABLE, &[Filter::eq("id", id)], patch)
            .await?;
        row_into(written)
    }

    async fn update_streak(&self, id: &str, streak: &StreakSummary) -> Result<UserProfile> {
        let patch = json!({
            "current_day_streak": streak.current_streak,
            "longest_day_streak": streak.longest_streak,
            "streak_start_date": streak.streak_start_date,
            "last_activity_date": streak.last_activity_date,
            "updated_at": Utc::now().to_rfc3339(),
        });
        let written = self
            .client
            .update(TABLE, &[Filter::eq("id", id)], patch)
            .await?;
        row_into(written)
    }
}
