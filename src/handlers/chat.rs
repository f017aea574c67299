use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::chat_message::{ChatMessage, SendMessageRequest};
use crate::models::user::User;
use crate::services::companion;
use crate::store::Collection;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub message: ChatMessage,
    pub reply: ChatMessage,
}

/// Returns the user's conversation oldest-first, seeding the welcome
/// message into an empty one.
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let all: Vec<ChatMessage> = state.store.load(Collection::ChatMessages)?;
    let mut messages: Vec<ChatMessage> = all
        .into_iter()
        .filter(|m| m.user_id == auth_user.id)
        .collect();
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    if messages.is_empty() {
        let users: Vec<User> = state.store.load(Collection::Users)?;
        let username = users
            .into_iter()
            .find(|u| u.id == auth_user.id)
            .map(|u| u.username)
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let welcome = ChatMessage::assistant(auth_user.id, companion::welcome(&username));
        state.store.append(Collection::ChatMessages, &welcome)?;
        messages.push(welcome);
    }

    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SendMessageRequest>,
) -> AppResult<Json<SendMessageResponse>> {
    let content = body.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Message content is required".into()));
    }

    let message = ChatMessage::user(auth_user.id, content.to_string());
    state.store.append(Collection::ChatMessages, &message)?;

    let reply_text = companion::reply_to(content, &mut rand::thread_rng());
    let reply = ChatMessage::assistant(auth_user.id, reply_text.to_string());
    state.store.append(Collection::ChatMessages, &reply)?;

    Ok(Json(SendMessageResponse { message, reply }))
}
