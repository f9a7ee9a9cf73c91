//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Point values per activity type
pub const POINTS_CALL: i64 = 2;
pub const POINTS_EMAIL: i64 = 1;
pub const POINTS_MEETING_REFERRAL: i64 = 12;
pub const POINTS_MEETING_NEW_REFERRAL: i64 = 20;
pub const POINTS_MESSAGE: i64 = 1;
pub const POINTS_SOCIAL_POST: i64 = 5;
/// Fallback value for custom activity types
pub const POINTS_DEFAULT: i64 = 5;

// Status tier thresholds (inclusive lower bounds)
pub const SILVER_MIN_POINTS: i64 = 100;
pub const GOLD_MIN_POINTS: i64 = 500;
pub const PLATINUM_MIN_POINTS: i64 = 2000;

// Profile defaults
pub const DEFAULT_DAILY_GOAL: u32 = 5;

// Configuration defaults
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROFILE_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 86_400;
pub const DEFAULT_LEADERBOARD_SIZE: usize = 25;
