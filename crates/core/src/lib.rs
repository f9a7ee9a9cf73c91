//! # LoanTrail Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Scoring rules (point valuation, duplicate guard, streaks, tiers)
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `loantrail-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod activity;
pub mod leaderboard;
pub mod scoring;

// Re-export specific items to avoid ambiguity
pub use activity::ports::{ActivityRepository, UserProfileRepository};
pub use activity::ActivityService;
pub use leaderboard::ports::LeaderboardRepository;
pub use leaderboard::LeaderboardService;
pub use scoring::{compute_streaks, day_bounds, normalize_client_name};
