//! Record-store implementation of the activity repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use loantrail_core::ActivityRepository;
use loantrail_domain::{Activity, ActivityPatch, ActivityType, LoanTrailError, Result};
use serde_json::json;

use super::client::{Filter, Order, RecordStoreClient};
use super::{row_into, without_server_fields};

const TABLE: &str = "activities";

/// Activity repository backed by the hosted record store.
pub struct StoreActivityRepository {
    client: std::sync::Arc<RecordStoreClient>,
}

impl StoreActivityRepository {
    pub fn new(client: std::sync::Arc<RecordStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityRepository for StoreActivityRepository {
    async fn insert(&self, activity: Activity) -> Result<Activity> {
        let row = serde_json::to_value(&activity)
            .map_err(|err| LoanTrailError::Internal(format!("activity serialization: {err}")))?;
        // The store assigns id and timestamps on insert.
        let row = without_server_fields(row, &["id", "created_at", "updated_at"]);
        let written = self.client.insert(TABLE, row).await?;
        row_into(written)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Activity>> {
        let rows = self
            .client
            .select(TABLE, &[Filter::eq("id", id)], None, Some(1))
            .await?;
        rows.into_iter().next().map(row_into).transpose()
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        let rows = self
            .client
            .select(
                TABLE,
                &[Filter::eq("user_id", user_id)],
                Some(&Order::desc("activity_date")),
                None,
            )
            .await?;
        rows.into_iter().map(row_into).collect()
    }

    async fn find_contacts_on_day(
        &self,
        user_id: &str,
        activity_type: &ActivityType,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<Activity>> {
        let filters = [
            Filter::eq("user_id", user_id),
            Filter::eq("activity_type", activity_type.as_tag()),
            Filter::gte("activity_date", day_start.to_rfc3339()),
            Filter::lte("activity_date", day_end.to_rfc3339()),
        ];
        let rows = self.client.select(TABLE, &filters, None, None).await?;
        rows.into_iter().map(row_into).collect()
    }

    async fn update(&self, id: &str, patch: &ActivityPatch) -> Result<Activity> {
        let mut body = serde_json::to_value(patch)
            .map_err(|err| LoanTrailError::Internal(format!("patch serialization: {err}")))?;
        if let Some(fields) = body.as_object_mut() {
            fields.insert("updated_at".into(), json!(Utc::now().to_rfc3339()));
        }
        let written = self
            .client
            .update(TABLE, &[Filter::eq("id", id)], body)
            .await?;
        row_into(written)
    }
}
