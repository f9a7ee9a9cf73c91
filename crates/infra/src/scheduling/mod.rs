//! Background scheduling
//!
//! Hosts the leaderboard snapshot scheduler and its error type.

pub mod error;
pub mod snapshot_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use snapshot_scheduler::{SnapshotScheduler, SnapshotSchedulerConfig};
