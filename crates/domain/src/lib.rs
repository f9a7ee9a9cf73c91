//! # LoanTrail Domain
//!
//! Business domain types and models for LoanTrail.
//!
//! This crate contains:
//! - Domain data types (Activity, UserProfile, leaderboard types)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (point values, tier thresholds, defaults)
//!
//! ## Architecture
//! - No dependencies on other LoanTrail crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use constants::*;
pub use errors::*;
pub use types::*;
