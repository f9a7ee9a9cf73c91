//! Mock repository implementations for testing
//!
//! In-memory mocks for the core repository ports, enabling deterministic
//! unit tests without a record store. Failure injection flags simulate
//! store outages; call counters let tests assert which writes happened.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use loantrail_core::activity::ports::{ActivityRepository, UserProfileRepository};
use loantrail_core::leaderboard::ports::LeaderboardRepository;
use loantrail_domain::{
    Activity, ActivityPatch, ActivityType, LeaderboardSnapshot, LoanTrailError, Result,
    StatusLevel, StreakSummary, UserProfile,
};

/// In-memory mock for `ActivityRepository`.
#[derive(Default)]
pub struct MockActivityRepository {
    activities: Mutex<Vec<Activity>>,
    insert_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockActivityRepository {
    /// Create a new mock seeded with the provided activities.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities: Mutex::new(activities), ..Self::default() }
    }

    /// Make every write fail with a store error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of insert attempts seen so far.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Vec<Activity>>> {
        self.activities
            .lock()
            .map_err(|_| LoanTrailError::Internal("poisoned mock activity lock".into()))
    }
}

#[async_trait]
impl ActivityRepository for MockActivityRepository {
    async fn insert(&self, mut activity: Activity) -> Result<Activity> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LoanTrailError::Store("injected insert failure".into()));
        }
        if activity.id.is_empty() {
            activity.id = format!("act-{}", uuid::Uuid::new_v4());
        }
        let now = Utc::now();
        activity.created_at = now;
        activity.updated_at = now;
        self.guard()?.push(activity.clone());
        Ok(activity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Activity>> {
        Ok(self.guard()?.iter().find(|activity| activity.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        Ok(self.guard()?.iter().filter(|activity| activity.user_id == user_id).cloned().collect())
    }

    async fn find_contacts_on_day(
        &self,
        user_id: &str,
        activity_type: &ActivityType,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<Activity>> {
        Ok(self
            .guard()?
            .iter()
            .filter(|activity| {
                activity.user_id == user_id
                    && &activity.activity_type == activity_type
                    && activity.activity_date >= day_start
                    && activity.activity_date <= day_end
            })
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, patch: &ActivityPatch) -> Result<Activity> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LoanTrailError::Store("injected update failure".into()));
        }
        let mut activities = self.guard()?;
        let activity = activities
            .iter_mut()
            .find(|activity| activity.id == id)
            .ok_or_else(|| LoanTrailError::NotFound(format!("activity {id}")))?;
        if let Some(activity_type) = &patch.activity_type {
            activity.activity_type = activity_type.clone();
        }
        if let Some(client_name) = &patch.client_name {
            activity.client_name = client_name.clone();
        }
        if let Some(client_type) = patch.client_type {
            activity.client_type = client_type;
        }
        if let Some(activity_date) = patch.activity_date {
            activity.activity_date = activity_date;
        }
        if let Some(potential_value) = patch.potential_value {
            activity.potential_value = Some(potential_value);
        }
        if let Some(notes) = &patch.notes {
            activity.notes = Some(notes.clone());
        }
        if let Some(tags) = &patch.tags {
            activity.tags = Some(tags.clone());
        }
        if let Some(status) = patch.status {
            activity.status = status;
        }
        activity.updated_at = Utc::now();
        Ok(activity.clone())
    }
}

/// In-memory mock for `UserProfileRepository`.
#[derive(Default)]
pub struct MockUserProfileRepository {
    profiles: Mutex<Vec<UserProfile>>,
    fail_writes: AtomicBool,
    points_updates: AtomicUsize,
}

impl MockUserProfileRepository {
    /// Create a new mock seeded with the provided profiles.
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles: Mutex::new(profiles), ..Self::default() }
    }

    /// Make every write fail with a store error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of points updates applied so far.
    pub fn points_updates(&self) -> usize {
        self.points_updates.load(Ordering::SeqCst)
    }

    /// Current state of one profile, if present.
    pub fn snapshot(&self, id: &str) -> Option<UserProfile> {
        self.profiles
            .lock()
            .ok()
            .and_then(|profiles| profiles.iter().find(|profile| profile.id == id).cloned())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Vec<UserProfile>>> {
        self.profiles
            .lock()
            .map_err(|_| LoanTrailError::Internal("poisoned mock profile lock".into()))
    }
}

#[async_trait]
impl UserProfileRepository for MockUserProfileRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<UserProfile>> {
        Ok(self.guard()?.iter().find(|profile| profile.id == id).cloned())
    }

    async fn get_by_external_ids(
        &self,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<Option<UserProfile>> {
        Ok(self
            .guard()?
            .iter()
            .find(|profile| {
                profile.external_user_id == external_user_id
                    && profile.external_location_id == external_location_id
            })
            .cloned())
    }

    async fn update_points(
        &self,
        id: &str,
        total_points: i64,
        status_level: StatusLevel,
    ) -> Result<UserProfile> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LoanTrailError::Store("injected profile write failure".into()));
        }
        self.points_updates.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.guard()?;
        let profile = profiles
            .iter_mut()
            .find(|profile| profile.id == id)
            .ok_or_else(|| LoanTrailError::NotFound(format!("user profile {id}")))?;
        profile.total_points = total_points;
        profile.status_level = status_level;
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn update_streak(&self, id: &str, streak: &StreakSummary) -> Result<UserProfile> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LoanTrailError::Store("injected profile write failure".into()));
        }
        let mut profiles = self.guard()?;
        let profile = profiles
            .iter_mut()
            .find(|profile| profile.id == id)
            .ok_or_else(|| LoanTrailError::NotFound(format!("user profile {id}")))?;
        profile.current_day_streak = streak.current_streak;
        profile.longest_day_streak = streak.longest_streak;
        profile.streak_start_date = streak.streak_start_date;
        profile.last_activity_date = streak.last_activity_date;
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }
}

/// In-memory mock for `LeaderboardRepository`.
#[derive(Default)]
pub struct MockLeaderboardRepository {
    profiles: Vec<UserProfile>,
    snapshots: Mutex<Vec<LeaderboardSnapshot>>,
}

impl MockLeaderboardRepository {
    /// Create a new mock seeded with the provided profiles.
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles, snapshots: Mutex::new(Vec::new()) }
    }

    /// Snapshots persisted so far.
    pub fn saved_snapshots(&self) -> Vec<LeaderboardSnapshot> {
        self.snapshots.lock().map(|snapshots| snapshots.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LeaderboardRepository for MockLeaderboardRepository {
    async fn top_profiles(&self, limit: usize) -> Result<Vec<UserProfile>> {
        let mut profiles = self.profiles.clone();
        profiles.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        profiles.truncate(limit);
        Ok(profiles)
    }

    async fn save_snapshot(&self, mut snapshot: LeaderboardSnapshot) -> Result<LeaderboardSnapshot> {
        if snapshot.id.is_empty() {
            snapshot.id = format!("snap-{}", uuid::Uuid::new_v4());
        }
        self.snapshots
            .lock()
            .map_err(|_| LoanTrailError::Internal("poisoned mock snapshot lock".into()))?
            .push(snapshot.clone());
        Ok(snapshot)
    }
}
