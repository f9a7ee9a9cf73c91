//! Shared test support for core service tests
#![allow(dead_code)]

pub mod repositories;

use chrono::{DateTime, TimeZone, Utc};
use loantrail_domain::{
    Activity, ActivityStatus, ActivityType, ClientType, StatusLevel, UserProfile,
};

/// Build a timestamp on a fixed, known calendar date.
pub fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).single().expect("valid test timestamp")
}

/// A minimal persisted activity owned by `user_id`.
pub fn activity(user_id: &str, activity_type: ActivityType, client_name: &str) -> Activity {
    let when = at(2024, 1, 5, 9);
    Activity {
        id: format!("act-{}", uuid::Uuid::new_v4()),
        user_id: user_id.to_string(),
        activity_type: activity_type.clone(),
        client_name: client_name.to_string(),
        client_type: ClientType::Individual,
        activity_date: when,
        potential_value: None,
        notes: None,
        tags: None,
        status: ActivityStatus::Approved,
        points: activity_type.points(),
        created_at: when,
        updated_at: when,
    }
}

/// A fresh profile with no points or streak history.
pub fn profile(id: &str, external_user_id: &str, external_location_id: &str) -> UserProfile {
    let when = at(2024, 1, 1, 0);
    UserProfile {
        id: id.to_string(),
        external_user_id: external_user_id.to_string(),
        external_location_id: external_location_id.to_string(),
        total_points: 0,
        status_level: StatusLevel::Bronze,
        current_day_streak: 0,
        longest_day_streak: 0,
        streak_start_date: None,
        last_activity_date: None,
        daily_goal: 5,
        created_at: when,
        updated_at: when,
    }
}
