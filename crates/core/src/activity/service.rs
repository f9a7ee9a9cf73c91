//! Activity recording service - core business logic
//!
//! Orchestrates one "record activity" submission: validate, apply the
//! duplicate-contact guard, persist, then update the owner's points and
//! streak as best-effort follow-ups.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use loantrail_domain::{
    Activity, ActivityPatch, ActivityType, DailyProgress, LoanTrailError, NewActivity, Result,
    StatusLevel, StreakSummary, UserProfile, ValidatedActivity,
};
use tracing::{debug, error};

use super::ports::{ActivityRepository, UserProfileRepository};
use crate::scoring::{compute_streaks, day_bounds, normalize_client_name};

/// Activity recording service
pub struct ActivityService {
    activities: Arc<dyn ActivityRepository>,
    profiles: Arc<dyn UserProfileRepository>,
}

impl ActivityService {
    /// Create a new activity service
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        profiles: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self { activities, profiles }
    }

    /// Record a submitted activity.
    ///
    /// Validation failures name every missing field and nothing is written.
    /// Once the activity row is committed it is the source of truth: the
    /// points and streak follow-ups are logged-and-swallowed on failure, so
    /// the derived profile fields may transiently lag until the next
    /// successful recompute.
    pub async fn record_activity(&self, input: NewActivity) -> Result<Activity> {
        let input = input.validate()?;

        // Resolve the owner first so the persisted row, the duplicate guard,
        // and the follow-ups all key on the same profile id. When nothing
        // resolves the submitted id is kept and the row still stands.
        let profile = self
            .resolve_profile(&input.user_id, &input.external_user_id, &input.external_location_id)
            .await;
        let owner_id = match &profile {
            Ok(profile) => profile.id.clone(),
            Err(_) => input.user_id.clone(),
        };

        let points = match input.points {
            Some(explicit) => explicit,
            None => self.points_for_submission(&owner_id, &input).await?,
        };

        let now = Utc::now();
        let persisted = self
            .activities
            .insert(Activity {
                // id and timestamps are overwritten by the store
                id: String::new(),
                user_id: owner_id,
                activity_type: input.activity_type.clone(),
                client_name: input.client_name.clone(),
                client_type: input.client_type,
                activity_date: input.activity_date,
                potential_value: input.potential_value,
                notes: input.notes.clone(),
                tags: input.tags.clone(),
                status: input.status,
                points,
                created_at: now,
                updated_at: now,
            })
            .await?;

        match profile {
            Ok(profile) => {
                if let Err(err) = self.award_points(&profile.id, persisted.points).await {
                    error!(error = %err, user_id = %profile.id, "failed to apply point delta after activity insert");
                }
                if let Err(err) = self.refresh_streak(&profile.id).await {
                    error!(error = %err, user_id = %profile.id, "failed to recompute streak after activity insert");
                }
            }
            Err(err) => {
                error!(error = %err, user_id = %input.user_id, "no profile resolved for post-insert updates");
            }
        }

        Ok(persisted)
    }

    /// Whether an equivalent contact was already logged the same calendar
    /// day: same user, same type, normalized client names equal.
    ///
    /// Only the direct contact channels (call, email, message) are subject
    /// to this rule; every other type always earns full points.
    pub async fn is_duplicate_contact(
        &self,
        user_id: &str,
        activity_type: &ActivityType,
        client_name: &str,
        activity_date: chrono::DateTime<Utc>,
    ) -> Result<bool> {
        if !activity_type.is_contact_channel() {
            return Ok(false);
        }
        let (day_start, day_end) = day_bounds(activity_date);
        let existing = self
            .activities
            .find_contacts_on_day(user_id, activity_type, day_start, day_end)
            .await?;
        let target = normalize_client_name(client_name);
        Ok(existing.iter().any(|activity| normalize_client_name(&activity.client_name) == target))
    }

    /// Apply a signed point delta to a user's running total.
    ///
    /// The new total is floored at zero and the status tier is re-resolved
    /// from it; both fields land in a single profile update.
    pub async fn award_points(&self, user_id: &str, delta: i64) -> Result<UserProfile> {
        let profile = self
            .profiles
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| LoanTrailError::NotFound(format!("user profile {user_id}")))?;

        let new_total = profile.total_points.saturating_add(delta).max(0);
        let status_level = StatusLevel::for_points(new_total);
        self.profiles.update_points(&profile.id, new_total, status_level).await
    }

    /// Recompute and persist a user's streak from their full history.
    pub async fn refresh_streak(&self, user_id: &str) -> Result<StreakSummary> {
        self.refresh_streak_as_of(user_id, Utc::now().date_naive()).await
    }

    /// Recompute the streak against an explicit "today".
    ///
    /// Deterministic over the history, so re-running it (concurrently or
    /// not) always converges to the same stored state.
    pub async fn refresh_streak_as_of(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<StreakSummary> {
        let history = self.activities.find_by_user(user_id).await?;
        let summary = compute_streaks(
            history.iter().map(|activity| activity.activity_date.date_naive()),
            today,
        );
        self.profiles.update_streak(user_id, &summary).await?;
        Ok(summary)
    }

    /// Fetch a profile by internal id
    pub async fn profile(&self, user_id: &str) -> Result<UserProfile> {
        self.profiles
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| LoanTrailError::NotFound(format!("user profile {user_id}")))
    }

    /// Fetch a profile by the external user/location token pair
    pub async fn profile_by_external_ids(
        &self,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<UserProfile> {
        self.profiles
            .get_by_external_ids(external_user_id, external_location_id)
            .await?
            .ok_or_else(|| {
                LoanTrailError::NotFound(format!(
                    "user profile for external ids {external_user_id}/{external_location_id}"
                ))
            })
    }

    /// A user's activity count for one calendar date against their daily goal
    pub async fn daily_progress(&self, user_id: &str, date: NaiveDate) -> Result<DailyProgress> {
        let profile = self.profile(user_id).await?;
        let history = self.activities.find_by_user(user_id).await?;
        let count = history
            .iter()
            .filter(|activity| activity.activity_date.date_naive() == date)
            .count() as u32;
        Ok(DailyProgress { date, count, goal: profile.daily_goal, goal_met: count >= profile.daily_goal })
    }

    /// Fetch a user's full activity history
    pub async fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        self.activities.find_by_user(user_id).await
    }

    /// Apply a partial update to an existing activity.
    ///
    /// Points and identity are not patchable; an empty patch is rejected
    /// rather than written.
    pub async fn update_activity(&self, id: &str, patch: &ActivityPatch) -> Result<Activity> {
        if patch.is_empty() {
            return Err(LoanTrailError::Validation("empty activity update".into()));
        }
        if patch.potential_value.is_some_and(|value| value < 0.0) {
            return Err(LoanTrailError::Validation(
                "potential_value must be non-negative".into(),
            ));
        }
        self.activities.update(id, patch).await
    }

    async fn points_for_submission(&self, owner_id: &str, input: &ValidatedActivity) -> Result<i64> {
        let duplicate = self
            .is_duplicate_contact(
                owner_id,
                &input.activity_type,
                &input.client_name,
                input.activity_date,
            )
            .await?;
        if duplicate {
            debug!(
                user_id = %owner_id,
                activity_type = %input.activity_type,
                "same-day duplicate contact, recording with zero points"
            );
            return Ok(0);
        }
        Ok(input.activity_type.points())
    }

    /// Resolve the owning profile, falling back to the external token pair
    /// when the supplied id is not (yet) an internal profile id.
    async fn resolve_profile(
        &self,
        user_id: &str,
        external_user_id: &str,
        external_location_id: &str,
    ) -> Result<UserProfile> {
        if let Some(profile) = self.profiles.get_by_id(user_id).await? {
            return Ok(profile);
        }
        self.profiles
            .get_by_external_ids(external_user_id, external_location_id)
            .await?
            .ok_or_else(|| LoanTrailError::NotFound(format!("user profile {user_id}")))
    }
}
