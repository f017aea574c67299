use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::AppState;

const MAX_ATTEMPTS: u32 = 10;
const WINDOW: Duration = Duration::from_secs(60);

/// Fixed-window in-memory limiter, keyed per caller. Single-instance
/// only.
#[derive(Clone, Default)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

struct Window {
    count: u32,
    started: Instant,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn allow(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started: now,
        });

        // Reset the window once it has elapsed.
        if now.duration_since(window.started) > WINDOW {
            window.count = 0;
            window.started = now;
        }

        if window.count >= MAX_ATTEMPTS {
            return false;
        }
        window.count += 1;
        true
    }
}

/// Limits login/register attempts per IP and path.
pub async fn rate_limit_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // The connect-info extension is absent when the router is driven
    // directly (tests); those callers share one bucket.
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".into());
    let path = req.uri().path().to_string();
    let key = format!("{ip}:{path}");

    if state.rate_limiter.allow(&key).await {
        Ok(next.run(req).await)
    } else {
        tracing::warn!(ip = %ip, path = %path, "Rate limit exceeded on auth endpoint");
        Err(AppError::RateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allows_up_to_the_limit() {
        let limiter = RateLimiter::new();
        for i in 0..MAX_ATTEMPTS {
            assert!(limiter.allow("key").await, "attempt {} should pass", i + 1);
        }
    }

    #[tokio::test]
    async fn blocks_past_the_limit() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_ATTEMPTS {
            limiter.allow("key").await;
        }
        assert!(!limiter.allow("key").await);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let limiter = RateLimiter::new();
        for _ in 0..MAX_ATTEMPTS {
            limiter.allow("a").await;
        }
        assert!(limiter.allow("b").await);
    }
}
