//! Consecutive-day streak calculation
//!
//! A streak is the number of consecutive calendar days containing at least
//! one activity. Multiple activities on one day count once. The current
//! streak only survives if the most recent activity day is today or
//! yesterday; the longest streak is computed over the full history either
//! way and is never reported smaller than the current one.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use loantrail_domain::StreakSummary;

/// Compute current/longest streaks over a user's activity dates.
///
/// `dates` may contain duplicates and arrive in any order; `today` is the
/// calendar date the break check runs against. Deriving the whole summary
/// from the full history makes the recomputation idempotent and safe to
/// re-run concurrently.
pub fn compute_streaks<I>(dates: I, today: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    // Distinct calendar days, ascending.
    let distinct: Vec<NaiveDate> = dates.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    let Some(&most_recent) = distinct.last() else {
        return StreakSummary::default();
    };

    // Longest run over the whole history, independent of the break check.
    let mut longest = 1u32;
    let mut run = 1u32;
    for pair in distinct.windows(2) {
        if next_day(pair[0]) == Some(pair[1]) {
            run += 1;
        } else {
            run = 1;
        }
        longest = longest.max(run);
    }

    // Current streak: broken unless the most recent day is today or
    // yesterday, otherwise walk backwards while the days stay consecutive.
    let mut current = 0u32;
    let mut streak_start = None;
    let gap_from_today = today.signed_duration_since(most_recent).num_days();
    if gap_from_today <= 1 {
        current = 1;
        streak_start = Some(most_recent);
        let mut pointer = most_recent;
        for &day in distinct.iter().rev().skip(1) {
            if next_day(day) == Some(pointer) {
                current += 1;
                streak_start = Some(day);
                pointer = day;
            } else {
                break;
            }
        }
    }

    StreakSummary {
        current_streak: current,
        longest_streak: longest.max(current),
        streak_start_date: streak_start,
        last_activity_date: Some(most_recent),
    }
}

fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn no_activities_yield_the_empty_summary() {
        let summary = compute_streaks(std::iter::empty(), date(2024, 1, 5));
        assert_eq!(summary, StreakSummary::default());
    }

    #[test]
    fn single_activity_today_is_a_one_day_streak() {
        let today = date(2024, 1, 5);
        let summary = compute_streaks([today], today);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 1);
        assert_eq!(summary.streak_start_date, Some(today));
        assert_eq!(summary.last_activity_date, Some(today));
    }

    #[test]
    fn five_consecutive_days_ending_today() {
        let today = date(2024, 1, 5);
        let days = (1..=5).map(|d| date(2024, 1, d));
        let summary = compute_streaks(days, today);
        assert_eq!(summary.current_streak, 5);
        assert!(summary.longest_streak >= 5);
        assert_eq!(summary.streak_start_date, Some(date(2024, 1, 1)));
        assert_eq!(summary.last_activity_date, Some(today));
    }

    #[test]
    fn streak_survives_when_last_activity_was_yesterday() {
        let summary =
            compute_streaks([date(2024, 1, 3), date(2024, 1, 4)], date(2024, 1, 5));
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.streak_start_date, Some(date(2024, 1, 3)));
    }

    #[test]
    fn old_run_breaks_but_still_counts_toward_longest() {
        // Activities on 01-01, 01-02, then a gap, then today (01-10).
        let days = [date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 10)];
        let summary = compute_streaks(days, date(2024, 1, 10));
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 2);
        assert_eq!(summary.streak_start_date, Some(date(2024, 1, 10)));
        assert_eq!(summary.last_activity_date, Some(date(2024, 1, 10)));
    }

    #[test]
    fn stale_history_reports_zero_current_but_computes_longest() {
        let days = [date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)];
        let summary = compute_streaks(days, date(2024, 1, 10));
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.streak_start_date, None);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.last_activity_date, Some(date(2024, 1, 3)));
    }

    #[test]
    fn same_day_activities_count_once() {
        let today = date(2024, 1, 5);
        let days = [today, today, date(2024, 1, 4), date(2024, 1, 4)];
        let summary = compute_streaks(days, today);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn walk_stops_at_the_first_gap() {
        let days = [date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 4), date(2024, 1, 5)];
        let summary = compute_streaks(days, date(2024, 1, 5));
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.streak_start_date, Some(date(2024, 1, 3)));
    }

    #[test]
    fn longest_covers_an_earlier_longer_run() {
        let days = [
            date(2024, 2, 1),
            date(2024, 2, 2),
            date(2024, 2, 3),
            date(2024, 2, 4),
            date(2024, 2, 10),
            date(2024, 2, 11),
        ];
        let summary = compute_streaks(days, date(2024, 2, 11));
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 4);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let days = [date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)];
        let today = date(2024, 1, 4);
        let first = compute_streaks(days, today);
        let second = compute_streaks(days, today);
        assert_eq!(first, second);
    }
}
