//! User profile and streak types
//!
//! One `UserProfile` holds a user's running gamification state: total
//! points, denormalized status tier, and the streak fields the streak
//! calculator maintains.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{GOLD_MIN_POINTS, PLATINUM_MIN_POINTS, SILVER_MIN_POINTS};

/// Named status tier derived from total points.
///
/// Bands are contiguous and non-overlapping: Bronze [0,99],
/// Silver [100,499], Gold [500,1999], Platinum [2000,∞).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl StatusLevel {
    /// Resolve the tier whose band contains `total_points`.
    ///
    /// Total over all inputs: anything below the Silver floor, including
    /// negative values that should never reach here, resolves to Bronze.
    pub fn for_points(total_points: i64) -> Self {
        if total_points >= PLATINUM_MIN_POINTS {
            Self::Platinum
        } else if total_points >= GOLD_MIN_POINTS {
            Self::Gold
        } else if total_points >= SILVER_MIN_POINTS {
            Self::Silver
        } else {
            Self::Bronze
        }
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        };
        write!(f, "{tag}")
    }
}

/// One user's running gamification state.
///
/// Created out of band by the onboarding flow; mutated by the points
/// updater and streak calculator, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// External system's user token, paired with `external_location_id`
    /// for lookup when the internal id is not yet known
    pub external_user_id: String,
    /// External system's tenant/location token
    pub external_location_id: String,
    /// Non-negative running total, floored at zero on every delta
    pub total_points: i64,
    /// Always equals `StatusLevel::for_points(total_points)`
    pub status_level: StatusLevel,
    pub current_day_streak: u32,
    /// Never less than `current_day_streak`
    pub longest_day_streak: u32,
    pub streak_start_date: Option<NaiveDate>,
    pub last_activity_date: Option<NaiveDate>,
    /// Activities per day considered "goal met"
    pub daily_goal: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One calendar day's activity count measured against the daily goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub count: u32,
    pub goal: u32,
    pub goal_met: bool,
}

/// Result of one streak recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_start_date: Option<NaiveDate>,
    pub last_activity_date: Option<NaiveDate>,
}
