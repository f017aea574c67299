use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single check-in. Immutable after creation; the health metrics are
/// simulated at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_level: u8,
    pub description: String,
    pub heart_rate: Option<u8>,
    pub sleep_quality: Option<u8>,
    pub stress_level: Option<u8>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMoodLogRequest {
    pub mood_level: u8,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodLogQuery {
    pub limit: Option<usize>,
}
