//! Profile read caching with moka
//!
//! Wraps a [`UserProfileRepository`] in a TTL-bounded in-memory cache so the
//! activity pipeline does not fetch the same profile from the store on every
//! submission. Writes go through to the backing repository and the fresh row
//! replaces the cached one, so a profile read after its own update is always
//! current. Lookups that miss are not cached; a profile created in the store
//! becomes visible on the next read.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use loantrail_core::UserProfileRepository;
use loantrail_domain::{CacheConfig, Result, StatusLevel, StreakSummary, UserProfile};
use moka::sync::Cache;
use tracing::debug;

const MAX_CACHED_PROFILES: u64 = 10_000;

/// Caching decorator over a profile repository.
pub struct CachedUserProfileRepository {
    inner: Arc<dyn UserProfileRepository>,

    /// Profiles keyed by internal id
    by_id: Cache<String, UserProfile>,

    /// Internal id keyed by the external (user, location) pair
    external_index: Cache<(String, String), String>,
}

impl CachedUserProfileRepository {
    pub fn new(inner: Arc<dyn UserProfileRepository>, config: &CacheConfig) -> Self {
        let ttl = Duration::from_secs(config.profile_ttl_seconds);
        Self {
            inner,
            by_id: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(MAX_CACHED_PROFILES)
                .build(),
            external_index: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(MAX_CACHED_PROFILES)
                .build(),
        }
    }

    /// Drop any cached state for one profile.
    pub fn invalidate(&self, user_id: &str) {
        if let Some(profile) = self.by_id.get(user_id) {
            self.external_index.invalidate(&(
                profile.external_user_id.clone(),
                profile.external_location_id.clone(),
            ));
        }
        self.by_id.invalidate(user_id);
        debug!(user_id, "profile cache invalidated");
    }

    fn store(&self, profile: &UserProfile) {
        self.external_index.insert(
            (profile.external_user_id.clone(), profile.external_location_id.clone()),
            profile.id.clone(),
        );
        self.by_id.insert(profile.id.clone(), profile.clone());
    }
}

#[async_trait]
impl UserProfileRepository for CachedUserProfileRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<UserProfile>> {
        if let Some(profile) = self.by_id.get(id) {
            debug!(user_id = id, "profile cache hit");
            return Ok(Some(profile));
        }

        let fetched = self.inner.get_by_id(id).await?;
        if let Some(profile) = &fetched {
            self.store(profile);
        }
        Ok(fetched)
    }

    async fn get_by_external_ids(
        &self,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<Option<UserProfile>> {
        let key = (external_user_id.to_string(), external_location_id.to_string());
        if let Some(id) = self.external_index.get(&key) {
            if let Some(profile) = self.by_id.get(&id) {
                debug!(user_id = %id, "profile cache hit via external ids");
                return Ok(Some(profile));
            }
        }

        let fetched = self.inner.get_by_external_ids(external_user_id, external_location_id).await?;
        if let Some(profile) = &fetched {
            self.store(profile);
        }
        Ok(fetched)
    }

    async fn update_points(
        &self,
        id: &str,
        total_points: i64,
        status_level: StatusLevel,
    ) -> Result<UserProfile> {
        let written = self.inner.update_points(id, total_points, status_level).await?;
        self.store(&written);
        Ok(written)
    }

    async fn update_streak(&self, id: &str, streak: &StreakSummary) -> Result<UserProfile> {
        let written = self.inner.update_streak(id, streak).await?;
        self.store(&written);
        Ok(written)
    }
}
