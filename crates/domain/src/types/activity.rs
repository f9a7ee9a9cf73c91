//! Prospecting activity types
//!
//! One `Activity` is a single logged interaction with a client (call, email,
//! meeting, ...). Activities are owned by exactly one user and are never
//! deleted; point values are computed once at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    POINTS_CALL, POINTS_DEFAULT, POINTS_EMAIL, POINTS_MEETING_NEW_REFERRAL,
    POINTS_MEETING_REFERRAL, POINTS_MESSAGE, POINTS_SOCIAL_POST,
};

/// Kind of prospecting interaction.
///
/// The known set is closed; anything else round-trips through
/// [`ActivityType::Other`] so custom tags configured in the dashboard are
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Call,
    Email,
    MeetingReferral,
    MeetingNewReferral,
    Message,
    SocialPost,
    /// Free-form fallback tag
    Other(String),
}

impl ActivityType {
    /// Stable string tag used on the wire and in the record store.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::MeetingReferral => "meeting_referral",
            Self::MeetingNewReferral => "meeting_new_referral",
            Self::Message => "message",
            Self::SocialPost => "social_post",
            Self::Other(tag) => tag,
        }
    }

    /// Point value awarded for a non-duplicate activity of this type.
    pub fn points(&self) -> i64 {
        match self {
            Self::Call => POINTS_CALL,
            Self::Email => POINTS_EMAIL,
            Self::MeetingReferral => POINTS_MEETING_REFERRAL,
            Self::MeetingNewReferral => POINTS_MEETING_NEW_REFERRAL,
            Self::Message => POINTS_MESSAGE,
            Self::SocialPost => POINTS_SOCIAL_POST,
            Self::Other(_) => POINTS_DEFAULT,
        }
    }

    /// Whether this type is a direct contact channel subject to the
    /// same-day duplicate-contact rule.
    pub fn is_contact_channel(&self) -> bool {
        matches!(self, Self::Call | Self::Email | Self::Message)
    }
}

impl From<String> for ActivityType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "call" => Self::Call,
            "email" => Self::Email,
            "meeting_referral" => Self::MeetingReferral,
            "meeting_new_referral" => Self::MeetingNewReferral,
            "message" => Self::Message,
            "social_post" => Self::SocialPost,
            _ => Self::Other(tag),
        }
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Whether the client is a person or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    Individual,
    Business,
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Business => write!(f, "business"),
        }
    }
}

/// Workflow status of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Approved,
    FollowUpRequired,
    PendingResponse,
    PreparingTerms,
    ProposalSent,
    WaitingForDocuments,
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Approved => "approved",
            Self::FollowUpRequired => "follow_up_required",
            Self::PendingResponse => "pending_response",
            Self::PreparingTerms => "preparing_terms",
            Self::ProposalSent => "proposal_sent",
            Self::WaitingForDocuments => "waiting_for_documents",
        };
        write!(f, "{tag}")
    }
}

/// One logged prospecting interaction, as persisted in the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque unique id, assigned by the store on creation
    pub id: String,
    /// Owning user (profile id)
    pub user_id: String,
    pub activity_type: ActivityType,
    /// Stored verbatim; normalized only for duplicate comparisons
    pub client_name: String,
    pub client_type: ClientType,
    pub activity_date: DateTime<Utc>,
    /// Optional non-negative monetary amount
    pub potential_value: Option<f64>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: ActivityStatus,
    /// Computed at creation time; zero under the duplicate-contact rule
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission payload for a new activity.
///
/// Every required submission field is optional here so validation can
/// report the complete set of missing fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    pub user_id: Option<String>,
    pub external_user_id: Option<String>,
    pub external_location_id: Option<String>,
    pub activity_type: Option<ActivityType>,
    pub client_name: Option<String>,
    pub client_type: Option<ClientType>,
    pub activity_date: Option<DateTime<Utc>>,
    pub potential_value: Option<f64>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ActivityStatus>,
    /// Explicit point value; when absent the service computes one
    pub points: Option<i64>,
}

impl NewActivity {
    /// Names of all required fields that are absent (or blank, for
    /// `client_name`). Empty means the submission is valid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.user_id.as_deref().map_or(true, str::is_empty) {
            missing.push("user_id");
        }
        if self.external_user_id.as_deref().map_or(true, str::is_empty) {
            missing.push("external_user_id");
        }
        if self.external_location_id.as_deref().map_or(true, str::is_empty) {
            missing.push("external_location_id");
        }
        if self.activity_type.is_none() {
            missing.push("activity_type");
        }
        if self.client_name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            missing.push("client_name");
        }
        if self.client_type.is_none() {
            missing.push("client_type");
        }
        if self.activity_date.is_none() {
            missing.push("activity_date");
        }
        if self.status.is_none() {
            missing.push("status");
        }
        missing
    }

    /// Check required fields and convert into the validated form.
    ///
    /// Fails with a single validation error naming every missing field, or
    /// rejecting a negative `potential_value`.
    pub fn validate(self) -> crate::errors::Result<ValidatedActivity> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(crate::errors::LoanTrailError::missing_fields(&missing));
        }
        if self.potential_value.is_some_and(|value| value < 0.0) {
            return Err(crate::errors::LoanTrailError::Validation(
                "potential_value must be non-negative".into(),
            ));
        }

        let Self {
            user_id,
            external_user_id,
            external_location_id,
            activity_type,
            client_name,
            client_type,
            activity_date,
            potential_value,
            notes,
            tags,
            status,
            points,
        } = self;

        match (
            user_id,
            external_user_id,
            external_location_id,
            activity_type,
            client_name,
            client_type,
            activity_date,
            status,
        ) {
            (
                Some(user_id),
                Some(external_user_id),
                Some(external_location_id),
                Some(activity_type),
                Some(client_name),
                Some(client_type),
                Some(activity_date),
                Some(status),
            ) => Ok(ValidatedActivity {
                user_id,
                external_user_id,
                external_location_id,
                activity_type,
                client_name,
                client_type,
                activity_date,
                potential_value,
                notes,
                tags,
                status,
                points,
            }),
            _ => Err(crate::errors::LoanTrailError::Internal(
                "required field absent after validation".into(),
            )),
        }
    }
}

/// A [`NewActivity`] with every required field verified present.
#[derive(Debug, Clone)]
pub struct ValidatedActivity {
    pub user_id: String,
    pub external_user_id: String,
    pub external_location_id: String,
    pub activity_type: ActivityType,
    pub client_name: String,
    pub client_type: ClientType,
    pub activity_date: DateTime<Utc>,
    pub potential_value: Option<f64>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: ActivityStatus,
    pub points: Option<i64>,
}

/// Partial update for an existing activity.
///
/// `id`, `user_id`, and `points` are deliberately absent: identity never
/// changes and points are only written by the creation flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
}

impl ActivityPatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.activity_type.is_none()
            && self.client_name.is_none()
            && self.client_type.is_none()
            && self.activity_date.is_none()
            && self.potential_value.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
            && self.status.is_none()
    }
}
