use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user aggregate, created zero-valued at registration and mutated
/// exactly once per check-in by the streak engine.
///
/// Invariant after every update: `longest_streak >= current_streak`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub user_id: Uuid,
    pub avatar_state: AvatarState,
    pub total_check_ins: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: Option<DateTime<Utc>>,
}

impl Profile {
    /// Zero-valued default for a user who has never checked in.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            avatar_state: AvatarState::Neutral,
            total_check_ins: 0,
            current_streak: 0,
            longest_streak: 0,
            last_check_in_date: None,
        }
    }
}

/// Three-valued mood-presentation indicator derived from the latest
/// check-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvatarState {
    Happy,
    Neutral,
    Sad,
}

impl AvatarState {
    pub fn from_mood(mood_level: u8) -> Self {
        if mood_level >= 4 {
            AvatarState::Happy
        } else if mood_level <= 2 {
            AvatarState::Sad
        } else {
            AvatarState::Neutral
        }
    }
}
