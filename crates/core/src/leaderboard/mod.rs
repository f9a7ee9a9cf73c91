//! Leaderboard standings and snapshot capture

pub mod ports;
pub mod service;

pub use service::LeaderboardService;
