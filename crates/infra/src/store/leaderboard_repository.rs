//! Record-store implementation of the leaderboard repository

use async_trait::async_trait;
use loantrail_core::LeaderboardRepository;
use loantrail_domain::{LeaderboardSnapshot, LoanTrailError, Result, UserProfile};

use super::client::{Order, RecordStoreClient};
use super::{row_into, without_server_fields};

const PROFILES_TABLE: &str = "user_profiles";
const SNAPSHOTS_TABLE: &str = "leaderboard_snapshots";

/// Leaderboard repository backed by the hosted record store.
pub struct StoreLeaderboardRepository {
    client: std::sync::Arc<RecordStoreClient>,
}

impl StoreLeaderboardRepository {
    pub fn new(client: std::sync::Arc<RecordStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeaderboardRepository for StoreLeaderboardRepository {
    async fn top_profiles(&self, limit: usize) -> Result<Vec<UserProfile>> {
        let rows = self
            .client
            .select(
                PROFILES_TABLE,
                &[],
                Some(&Order::desc("total_points")),
                Some(limit),
            )
            .await?;
        rows.into_iter().map(row_into).collect()
    }

    async fn save_snapshot(&self, snapshot: LeaderboardSnapshot) -> Result<LeaderboardSnapshot> {
        let row = serde_json::to_value(&snapshot)
            .map_err(|err| LoanTrailError::Internal(format!("snapshot serialization: {err}")))?;
        let row = without_server_fields(row, &["id"]);
        let written = self.client.insert(SNAPSHOTS_TABLE, row).await?;
        row_into(written)
    }
}
