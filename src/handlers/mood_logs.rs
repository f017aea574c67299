use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::mood_log::{CreateMoodLogRequest, MoodLog, MoodLogQuery};
use crate::models::profile::Profile;
use crate::services::{companion, metrics, mood, streak};
use crate::store::Collection;
use crate::AppState;

/// How many recent logs feed the dashboard emotion curve.
const SERIES_DAYS: usize = 7;

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub log: MoodLog,
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encouragement: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodSummary {
    pub today: Option<MoodLog>,
    /// Up to seven most recent mood levels, oldest first.
    pub series: Vec<u8>,
    pub average_mood: f64,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encouragement: Option<String>,
}

pub async fn create_mood_log(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateMoodLogRequest>,
) -> AppResult<Json<CheckInResponse>> {
    if !(1..=5).contains(&body.mood_level) {
        return Err(AppError::Validation(
            "Mood level must be between 1 and 5".into(),
        ));
    }
    let description = body.description.trim();
    if description.is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }
    if description.chars().count() > 200 {
        return Err(AppError::Validation(
            "Description must be at most 200 characters".into(),
        ));
    }

    let mut rng = rand::thread_rng();
    let simulated = metrics::simulate(&mut rng);
    let now = Utc::now();
    let log = MoodLog {
        id: Uuid::new_v4(),
        user_id: auth_user.id,
        mood_level: body.mood_level,
        description: description.to_string(),
        heart_rate: Some(simulated.heart_rate),
        sleep_quality: Some(simulated.sleep_quality),
        stress_level: Some(simulated.stress_level),
        created_at: now,
    };
    state.store.append(Collection::MoodLogs, &log)?;

    // Read-modify-write of the single mutable aggregate.
    let mut profiles: Vec<Profile> = state.store.load(Collection::Profiles)?;
    let existing = profiles
        .iter()
        .find(|p| p.user_id == auth_user.id)
        .cloned()
        .unwrap_or_else(|| Profile::new(auth_user.id));
    let updated = streak::update_profile(&existing, &log, now);
    match profiles.iter().position(|p| p.user_id == auth_user.id) {
        Some(i) => profiles[i] = updated.clone(),
        None => profiles.push(updated.clone()),
    }
    state.store.save(Collection::Profiles, &profiles)?;

    let encouragement =
        (log.mood_level <= 2).then(|| companion::encouragement(&mut rng).to_string());

    tracing::info!(
        user_id = %auth_user.id,
        mood = log.mood_level,
        streak = updated.current_streak,
        "Check-in recorded"
    );

    Ok(Json(CheckInResponse {
        log,
        profile: updated,
        encouragement,
    }))
}

pub async fn list_mood_logs(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MoodLogQuery>,
) -> AppResult<Json<Vec<MoodLog>>> {
    let mut logs = user_logs(&state, auth_user.id)?;
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = query.limit {
        logs.truncate(limit);
    }
    Ok(Json(logs))
}

pub async fn mood_summary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<MoodSummary>> {
    let mut logs = user_logs(&state, auth_user.id)?;
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let today_date = Utc::now().date_naive();
    let today = logs
        .iter()
        .find(|log| log.created_at.date_naive() == today_date)
        .cloned();

    // The dashboard average covers the same window the curve shows.
    let recent: Vec<MoodLog> = logs.iter().take(SERIES_DAYS).cloned().collect();
    let series = mood::series(&logs, SERIES_DAYS);
    let average_mood = mood::average(&recent);

    let encouragement = today
        .as_ref()
        .filter(|log| log.mood_level <= 2)
        .map(|_| companion::encouragement(&mut rand::thread_rng()).to_string());

    Ok(Json(MoodSummary {
        today,
        series,
        average_mood,
        count: logs.len(),
        encouragement,
    }))
}

fn user_logs(state: &AppState, user_id: Uuid) -> AppResult<Vec<MoodLog>> {
    let all: Vec<MoodLog> = state.store.load(Collection::MoodLogs)?;
    Ok(all.into_iter().filter(|log| log.user_id == user_id).collect())
}
