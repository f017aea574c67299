use axum::{extract::State, Extension, Json};
use chrono::Utc;
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::mood_log::MoodLog;
use crate::models::profile::Profile;
use crate::services::badges::{self, BadgeStatus};
use crate::services::{companion, mood};
use crate::store::Collection;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub average_mood: f64,
    pub days_active: i64,
    pub badges: Vec<BadgeStatus>,
    pub earned_badges: usize,
    pub quote: String,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<ProfileView>> {
    let profiles: Vec<Profile> = state.store.load(Collection::Profiles)?;
    let profile = profiles
        .into_iter()
        .find(|p| p.user_id == auth_user.id)
        .unwrap_or_else(|| Profile::new(auth_user.id));

    let all: Vec<MoodLog> = state.store.load(Collection::MoodLogs)?;
    let logs: Vec<MoodLog> = all
        .into_iter()
        .filter(|log| log.user_id == auth_user.id)
        .collect();

    let badges = badges::evaluate(&profile);
    let earned_badges = badges.iter().filter(|b| b.earned).count();
    let quote = companion::motivational_quote(&mut rand::thread_rng()).to_string();

    Ok(Json(ProfileView {
        average_mood: mood::average(&logs),
        days_active: mood::days_active(&logs, Utc::now()),
        badges,
        earned_badges,
        quote,
        profile,
    }))
}
