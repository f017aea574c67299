//! Rolling statistics over a user's mood-log history.

use chrono::{DateTime, Utc};

use crate::models::mood_log::MoodLog;

/// Arithmetic mean of mood levels. Returns `0.0` for an empty slice —
/// a sentinel outside the valid 1-5 range, so callers must check for
/// emptiness before treating the result as data.
pub fn average(logs: &[MoodLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    let sum: f64 = logs.iter().map(|log| f64::from(log.mood_level)).sum();
    sum / logs.len() as f64
}

/// The `n` most recent mood levels in chronological order (oldest
/// first), for rendering the emotion curve. Returns everything if fewer
/// than `n` logs exist.
pub fn series(logs: &[MoodLog], n: usize) -> Vec<u8> {
    let mut sorted: Vec<&MoodLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let mut levels: Vec<u8> = sorted.into_iter().take(n).map(|log| log.mood_level).collect();
    levels.reverse();
    levels
}

/// Whole days elapsed since the oldest log, rounded up. Zero with no
/// history.
pub fn days_active(logs: &[MoodLog], now: DateTime<Utc>) -> i64 {
    let Some(first) = logs.iter().min_by_key(|log| log.created_at) else {
        return 0;
    };
    let seconds = now.signed_duration_since(first.created_at).num_seconds().max(0);
    (seconds + 86_399) / 86_400
}
