//! # LoanTrail Infra
//!
//! Infrastructure layer: everything that touches the outside world.
//!
//! This crate contains:
//! - The hosted record-store client and the repository implementations of
//!   the core ports
//! - The TTL-bounded profile read cache
//! - The leaderboard snapshot scheduler
//! - The configuration loader
//!
//! ## Architecture
//! - Implements the port traits defined in `loantrail-core`
//! - Core never depends on this crate; wiring happens in the api crate

pub mod cache;
pub mod config;
pub mod scheduling;
pub mod store;

pub use cache::CachedUserProfileRepository;
pub use scheduling::{SnapshotScheduler, SnapshotSchedulerConfig};
pub use store::{
    Filter, Order, RecordStoreClient, StoreActivityRepository, StoreLeaderboardRepository,
    StoreUserProfileRepository,
};
