//! Streak engine: folds a new check-in into a user's profile aggregate.
//!
//! A streak counts consecutive calendar days with at least one check-in.
//! Only calendar dates matter for the transition; time-of-day is ignored.

use chrono::{DateTime, Duration, Utc};

use crate::models::mood_log::MoodLog;
use crate::models::profile::{AvatarState, Profile};

/// Compute the updated profile for a newly submitted check-in.
///
/// Pure: the caller persists the returned profile (read-modify-write) and
/// supplies [`Profile::new`] if the user has never checked in before.
pub fn update_profile(existing: &Profile, new_log: &MoodLog, now: DateTime<Utc>) -> Profile {
    let today = now.date_naive();
    let yesterday = today - Duration::days(1);
    let last_day = existing.last_check_in_date.map(|d| d.date_naive());

    let current_streak = match last_day {
        // Consecutive day: streak grows.
        Some(day) if day == yesterday => existing.current_streak + 1,
        // Second check-in on the same day: streak neither grows nor breaks.
        Some(day) if day == today => existing.current_streak,
        // Gap of two or more days, or first-ever check-in.
        _ => 1,
    };

    Profile {
        user_id: existing.user_id,
        avatar_state: AvatarState::from_mood(new_log.mood_level),
        total_check_ins: existing.total_check_ins + 1,
        current_streak,
        longest_streak: existing.longest_streak.max(current_streak),
        last_check_in_date: Some(now),
    }
}
