use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::models::user::{User, UserResponse};
use crate::store::Collection;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 254, message = "Email too long"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "Username is required"))]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: Uuid,
    pub user: UserResponse,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut users: Vec<User> = state.store.load(Collection::Users)?;
    if users.iter().any(|u| u.email == body.email) {
        return Err(AppError::DuplicateEmail);
    }

    let user = User::new(body.username, body.email, body.password);
    users.push(user.clone());
    state.store.save(Collection::Users, &users)?;

    // Every user gets a zero-valued profile at registration.
    let mut profiles: Vec<Profile> = state.store.load(Collection::Profiles)?;
    profiles.push(Profile::new(user.id));
    state.store.save(Collection::Profiles, &profiles)?;

    let token = state.sessions.create(user.id).await;
    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let users: Vec<User> = state.store.load(Collection::Users)?;
    let user = users
        .into_iter()
        .find(|u| u.email == body.email)
        .ok_or(AppError::InvalidCredentials)?;

    if user.password != body.password {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.create(user.id).await;
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<serde_json::Value>> {
    state.sessions.revoke(auth_user.token).await;
    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserResponse>> {
    let users: Vec<User> = state.store.load(Collection::Users)?;
    let user = users
        .into_iter()
        .find(|u| u.id == auth_user.id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(user.into()))
}
