//! Port interfaces for leaderboard queries and snapshot persistence

use async_trait::async_trait;
use loantrail_domain::{LeaderboardSnapshot, Result, UserProfile};

/// Trait for reading ranked profiles and persisting snapshots
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// The top profiles by total points, at most `limit` rows
    async fn top_profiles(&self, limit: usize) -> Result<Vec<UserProfile>>;

    /// Persist a snapshot; the store assigns its id. Returns the row as
    /// written.
    async fn save_snapshot(&self, snapshot: LeaderboardSnapshot) -> Result<LeaderboardSnapshot>;
}
