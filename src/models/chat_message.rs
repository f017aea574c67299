use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in a user's append-only conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(user_id: Uuid, content: String) -> Self {
        Self::with_role(user_id, ChatRole::User, content)
    }

    pub fn assistant(user_id: Uuid, content: String) -> Self {
        Self::with_role(user_id, ChatRole::Assistant, content)
    }

    fn with_role(user_id: Uuid, role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}
