//! Scoring rules shared by the activity and leaderboard services
//!
//! Everything here is a pure function: client-name normalization for the
//! duplicate-contact guard, calendar-day bounds, and the streak walk in
//! [`streak`].

pub mod streak;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

pub use streak::compute_streaks;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should compile - this is a bug"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word regex should compile - this is a bug"));

/// Normalize a client name for duplicate comparison.
///
/// Lowercase, collapse whitespace runs to a single space, trim, then strip
/// every character that is neither a word character nor whitespace. The
/// stored name is never touched; this form exists only for equality checks.
pub fn normalize_client_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let collapsed = WHITESPACE_RUNS.replace_all(&lowered, " ");
    NON_WORD.replace_all(collapsed.trim(), "").into_owned()
}

/// Inclusive bounds of the calendar day containing `moment`, in the same
/// timestamp representation stored activities use.
pub fn day_bounds(moment: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = moment.date_naive();
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    (Utc.from_utc_datetime(&start), Utc.from_utc_datetime(&end))
}
