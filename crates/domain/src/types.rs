//! Domain types and models

pub mod activity;
pub mod leaderboard;
pub mod user;

pub use activity::{
    Activity, ActivityPatch, ActivityStatus, ActivityType, ClientType, NewActivity,
    ValidatedActivity,
};
pub use leaderboard::{LeaderboardEntry, LeaderboardSnapshot};
pub use user::{DailyProgress, StatusLevel, StreakSummary, UserProfile};
