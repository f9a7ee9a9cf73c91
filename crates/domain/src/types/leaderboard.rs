//! Leaderboard types
//!
//! Standings are computed on demand from profiles; snapshots are the
//! persisted daily captures taken by the scheduler (or a manual trigger).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::user::StatusLevel;

/// One ranked row on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank
    pub rank: u32,
    pub user_id: String,
    pub total_points: i64,
    pub status_level: StatusLevel,
    pub current_day_streak: u32,
}

/// A persisted capture of the leaderboard at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    /// Opaque unique id, assigned by the store on creation
    pub id: String,
    pub captured_at: DateTime<Utc>,
    pub entries: Vec<LeaderboardEntry>,
}
