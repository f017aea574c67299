use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory session table: opaque bearer token -> user id.
///
/// The process-local stand-in for the reference app's "current user"
/// marker. Sessions do not survive a restart; there is deliberately no
/// real credential or token scheme here.
#[derive(Clone, Default)]
pub struct Sessions {
    tokens: Arc<Mutex<HashMap<Uuid, Uuid>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, user_id: Uuid) -> Uuid {
        let token = Uuid::new_v4();
        self.tokens.lock().await.insert(token, user_id);
        token
    }

    pub async fn resolve(&self, token: Uuid) -> Option<Uuid> {
        self.tokens.lock().await.get(&token).copied()
    }

    pub async fn revoke(&self, token: Uuid) {
        self.tokens.lock().await.remove(&token);
    }
}
