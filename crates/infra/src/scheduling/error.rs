//! Scheduler error types

use loantrail_domain::LoanTrailError;
use thiserror::Error;

/// Scheduler-specific errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Scheduler is already running
    #[error("scheduler already running")]
    AlreadyRunning,

    /// Scheduler is not running
    #[error("scheduler not running")]
    NotRunning,

    /// Shutdown did not complete in time
    #[error("scheduler shutdown timed out after {seconds}s")]
    ShutdownTimeout { seconds: u64 },

    /// Background task join failed
    #[error("scheduler task join failed: {0}")]
    TaskJoinFailed(String),
}

impl From<SchedulerError> for LoanTrailError {
    fn from(err: SchedulerError) -> Self {
        match err {
            SchedulerError::AlreadyRunning | SchedulerError::NotRunning => {
                LoanTrailError::Validation(err.to_string())
            }
            SchedulerError::ShutdownTimeout { .. } | SchedulerError::TaskJoinFailed(_) => {
                LoanTrailError::Internal(err.to_string())
            }
        }
    }
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
