//! Leaderboard service - ranking and snapshot capture
//!
//! Standings are derived from profiles on demand; `capture_snapshot` is the
//! manually-triggerable twin of the scheduled daily capture.

use std::sync::Arc;

use chrono::Utc;
use loantrail_domain::{LeaderboardEntry, LeaderboardSnapshot, Result, UserProfile};
use tracing::info;

use super::ports::LeaderboardRepository;

/// Leaderboard service
pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    /// Create a new leaderboard service
    pub fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        Self { repository }
    }

    /// Current standings: top `limit` users ranked by total points
    /// descending, ties broken by the earlier profile update.
    pub async fn standings(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let mut profiles = self.repository.top_profiles(limit).await?;
        profiles.sort_by(|a, b| {
            b.total_points.cmp(&a.total_points).then(a.updated_at.cmp(&b.updated_at))
        });
        Ok(profiles.iter().enumerate().map(|(index, profile)| rank(index, profile)).collect())
    }

    /// Capture and persist a snapshot of the current standings.
    pub async fn capture_snapshot(&self, limit: usize) -> Result<LeaderboardSnapshot> {
        let entries = self.standings(limit).await?;
        let snapshot = self
            .repository
            .save_snapshot(LeaderboardSnapshot {
                // id is overwritten by the store
                id: String::new(),
                captured_at: Utc::now(),
                entries,
            })
            .await?;
        info!(snapshot_id = %snapshot.id, entries = snapshot.entries.len(), "leaderboard snapshot captured");
        Ok(snapshot)
    }
}

fn rank(index: usize, profile: &UserProfile) -> LeaderboardEntry {
    LeaderboardEntry {
        rank: index as u32 + 1,
        user_id: profile.id.clone(),
        total_points: profile.total_points,
        status_level: profile.status_level,
        current_day_streak: profile.current_day_streak,
    }
}
