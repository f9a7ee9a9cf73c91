//! Periodic leaderboard snapshot capture
//!
//! Spawns a background task that captures a leaderboard snapshot once per
//! interval. Capture failures are logged and the loop keeps ticking; the
//! next interval tries again. Supports stop and restart.

use std::sync::Arc;
use std::time::Duration;

use loantrail_core::LeaderboardService;
use loantrail_domain::SchedulerConfig;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use super::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the snapshot scheduler
#[derive(Debug, Clone)]
pub struct SnapshotSchedulerConfig {
    /// Time between captures
    pub interval: Duration,
    /// Number of ranked entries each snapshot keeps
    pub leaderboard_size: usize,
}

impl Default for SnapshotSchedulerConfig {
    fn default() -> Self {
        let defaults = SchedulerConfig::default();
        Self {
            interval: Duration::from_secs(defaults.snapshot_interval_seconds),
            leaderboard_size: defaults.leaderboard_size,
        }
    }
}

impl From<&SchedulerConfig> for SnapshotSchedulerConfig {
    fn from(config: &SchedulerConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.snapshot_interval_seconds),
            leaderboard_size: config.leaderboard_size,
        }
    }
}

/// Scheduler that captures leaderboard snapshots on an interval
pub struct SnapshotScheduler {
    leaderboard: Arc<LeaderboardService>,
    config: SnapshotSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl SnapshotScheduler {
    /// Create a new snapshot scheduler
    pub fn new(leaderboard: Arc<LeaderboardService>, config: SnapshotSchedulerConfig) -> Self {
        Self {
            leaderboard,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the scheduler
    ///
    /// # Errors
    /// Returns an error if the scheduler is already running
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(
            interval_seconds = self.config.interval.as_secs(),
            leaderboard_size = self.config.leaderboard_size,
            "Starting snapshot scheduler"
        );

        // A fresh token supports restart after stop
        self.cancellation_token = CancellationToken::new();

        let leaderboard = Arc::clone(&self.leaderboard);
        let config = self.config.clone();
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::capture_loop(leaderboard, config, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!("Snapshot scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully
    ///
    /// # Errors
    /// Returns an error if the scheduler is not running
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!("Stopping snapshot scheduler");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            let join_timeout = Duration::from_secs(5);
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::ShutdownTimeout { seconds: join_timeout.as_secs() })?
                .map_err(|err| SchedulerError::TaskJoinFailed(err.to_string()))?;
        }

        info!("Snapshot scheduler stopped");
        Ok(())
    }

    /// Capture a snapshot immediately, outside the interval.
    ///
    /// Works whether or not the background loop is running.
    pub async fn run_now(&self) -> loantrail_domain::Result<loantrail_domain::LeaderboardSnapshot> {
        self.leaderboard.capture_snapshot(self.config.leaderboard_size).await
    }

    /// Check if the scheduler has an active task that hasn't finished
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Background capture loop
    async fn capture_loop(
        leaderboard: Arc<LeaderboardService>,
        config: SnapshotSchedulerConfig,
        cancel: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Snapshot loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(config.interval) => {
                    if let Err(e) = leaderboard.capture_snapshot(config.leaderboard_size).await {
                        error!(error = %e, "Failed to capture leaderboard snapshot");
                    }
                }
            }
        }
    }
}

/// Ensure the background task is cancelled when dropped
impl Drop for SnapshotScheduler {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            self.cancellation_token.cancel();
        }
    }
}
