//! End-to-end API tests driving the router directly over an in-memory
//! record store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use mindbloom_api::auth::rate_limit::RateLimiter;
use mindbloom_api::auth::session::Sessions;
use mindbloom_api::config::Config;
use mindbloom_api::store::{MemoryStore, Store};
use mindbloom_api::{app, AppState};

fn test_app() -> Router {
    let state = AppState {
        store: Store::new(MemoryStore::default()),
        config: Arc::new(Config::from_env()),
        sessions: Sessions::new(),
        rate_limiter: RateLimiter::new(),
    };
    app(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, email: &str, username: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "hunter2",
            "username": username,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

fn phq9_responses(answer: u8, count: usize) -> Value {
    let mut map = serde_json::Map::new();
    for question in 0..count {
        map.insert(question.to_string(), json!(answer));
    }
    Value::Object(map)
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "mindbloom-api");

    let (status, body) = request(&app, "GET", "/readyz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn register_creates_user_and_zeroed_profile() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, me) = request(&app, "GET", "/api/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "ada");
    assert_eq!(me["email"], "ada@example.com");
    // The stored plaintext password never leaks into responses.
    assert!(me.get("password").is_none());

    let (status, profile) = request(&app, "GET", "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["total_check_ins"], 0);
    assert_eq!(profile["current_streak"], 0);
    assert_eq!(profile["longest_streak"], 0);
    assert_eq!(profile["avatar_state"], "neutral");
    assert!(profile["last_check_in_date"].is_null());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = test_app();
    register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": "ada@example.com",
            "password": "other",
            "username": "ada2",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = test_app();
    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": "not-an-email",
            "password": "x",
            "username": "x",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = test_app();
    register(&app, "ada@example.com", "ada").await;

    let (status, unknown) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, wrong) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Unknown email and wrong password are indistinguishable.
    assert_eq!(unknown["error"]["message"], wrong["error"]["message"]);
    assert_eq!(wrong["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn login_returns_a_working_token() {
    let app = test_app();
    register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (status, _) = request(&app, "GET", "/api/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, _) = request(&app, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", "/api/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = test_app();
    let (status, _) = request(&app, "GET", "/api/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, "GET", "/api/profile", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn check_in_updates_profile_and_simulates_metrics() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 4, "description": "productive morning" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["log"]["mood_level"], 4);
    assert_eq!(body["log"]["description"], "productive morning");
    let heart_rate = body["log"]["heart_rate"].as_u64().unwrap();
    assert!((60..=99).contains(&heart_rate));
    let sleep = body["log"]["sleep_quality"].as_u64().unwrap();
    assert!((4..=9).contains(&sleep));
    let stress = body["log"]["stress_level"].as_u64().unwrap();
    assert!((2..=8).contains(&stress));

    assert_eq!(body["profile"]["total_check_ins"], 1);
    assert_eq!(body["profile"]["current_streak"], 1);
    assert_eq!(body["profile"]["longest_streak"], 1);
    assert_eq!(body["profile"]["avatar_state"], "happy");
    // A good mood gets no encouragement.
    assert!(body.get("encouragement").is_none());
}

#[tokio::test]
async fn low_mood_check_in_returns_an_encouragement() {
    let encouragements = [
        "Take a deep breath, today might be heavy, but you're stronger than you think.",
        "Even the sun rests behind the clouds before shining again.",
        "You're doing your best, and that's all that matters today.",
        "Every emotion is valid. Let yourself feel, and know that tomorrow is a new beginning.",
    ];

    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 1, "description": "rough day" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["avatar_state"], "sad");
    let encouragement = body["encouragement"].as_str().unwrap();
    assert!(encouragements.contains(&encouragement));
}

#[tokio::test]
async fn check_in_validation() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 0, "description": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 3, "description": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let long = "x".repeat(201);
    let (status, _) = request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 3, "description": long })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn summary_reflects_todays_check_in() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, empty) = request(&app, "GET", "/api/mood-logs/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(empty["today"].is_null());
    assert_eq!(empty["count"], 0);
    assert_eq!(empty["average_mood"], 0.0);
    assert_eq!(empty["series"].as_array().unwrap().len(), 0);

    request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 4, "description": "ok" })),
    )
    .await;

    let (status, summary) =
        request(&app, "GET", "/api/mood-logs/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["today"]["mood_level"], 4);
    assert_eq!(summary["count"], 1);
    assert_eq!(summary["average_mood"], 4.0);
    assert_eq!(summary["series"], json!([4]));
}

#[tokio::test]
async fn mood_logs_are_listed_most_recent_first() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    for (level, text) in [(2, "one"), (3, "two"), (5, "three")] {
        request(
            &app,
            "POST",
            "/api/mood-logs",
            Some(&token),
            Some(json!({ "mood_level": level, "description": text })),
        )
        .await;
    }

    let (status, logs) = request(&app, "GET", "/api/mood-logs", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["description"], "three");
    assert_eq!(logs[2]["description"], "one");

    let (_, limited) = request(&app, "GET", "/api/mood-logs?limit=2", Some(&token), None).await;
    assert_eq!(limited.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn mood_logs_are_isolated_per_user() {
    let app = test_app();
    let ada = register(&app, "ada@example.com", "ada").await;
    let ben = register(&app, "ben@example.com", "ben").await;

    request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&ada),
        Some(json!({ "mood_level": 5, "description": "mine" })),
    )
    .await;

    let (_, bens_logs) = request(&app, "GET", "/api/mood-logs", Some(&ben), None).await;
    assert_eq!(bens_logs.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_conversation_is_seeded_with_a_welcome() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, messages) = request(&app, "GET", "/api/chat/messages", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let messages = messages.as_array().unwrap().clone();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "assistant");
    let content = messages[0]["content"].as_str().unwrap();
    assert!(content.starts_with("Hi ada,"));

    // A second read does not seed another welcome.
    let (_, again) = request(&app, "GET", "/api/chat/messages", Some(&token), None).await;
    assert_eq!(again.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn chat_reply_matches_keyword_category() {
    let sad_replies = [
        "I hear you. It sounds like today has been quite intense — would you like to tell me more?",
        "It's okay to feel this way. Your emotions are valid, and I'm here to listen without judgment.",
        "Thank you for sharing that with me. Sometimes just expressing how we feel can bring a bit of relief.",
    ];

    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/chat/messages",
        Some(&token),
        Some(json!({ "content": "I've been feeling sad all week" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["role"], "user");
    assert_eq!(body["reply"]["role"], "assistant");
    let reply = body["reply"]["content"].as_str().unwrap();
    assert!(sad_replies.contains(&reply));

    // Both messages land in the conversation after the welcome.
    let (_, messages) = request(&app, "GET", "/api/chat/messages", Some(&token), None).await;
    assert_eq!(messages.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_chat_message_is_rejected() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/chat/messages",
        Some(&token),
        Some(json!({ "content": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn phq9_metadata_lists_nine_items() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, meta) = request(&app, "GET", "/api/questionnaires/phq9", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(meta["items"].as_array().unwrap().len(), 9);
    assert_eq!(meta["options"].as_array().unwrap().len(), 4);
    assert_eq!(meta["max_score"], 27);
}

#[tokio::test]
async fn questionnaire_scoring_end_to_end() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, severe) = request(
        &app,
        "POST",
        "/api/questionnaires",
        Some(&token),
        Some(json!({ "responses": phq9_responses(3, 9) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(severe["score"], 27);
    assert_eq!(severe["interpretation"]["level"], "Severe");

    let (status, minimal) = request(
        &app,
        "POST",
        "/api/questionnaires",
        Some(&token),
        Some(json!({ "responses": phq9_responses(0, 9) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(minimal["score"], 0);
    assert_eq!(minimal["interpretation"]["level"], "Minimal");

    // History is most recent first, each entry carrying its interpretation.
    let (status, history) = request(&app, "GET", "/api/questionnaires", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap().clone();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["score"], 0);
    assert_eq!(history[0]["questionnaire_type"], "PHQ-9");
    assert_eq!(history[1]["interpretation"]["level"], "Severe");
}

#[tokio::test]
async fn incomplete_questionnaire_is_rejected() {
    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/questionnaires",
        Some(&token),
        Some(json!({ "responses": phq9_responses(2, 8) })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("9"), "unexpected message: {message}");

    // Nothing was persisted.
    let (_, history) = request(&app, "GET", "/api/questionnaires", Some(&token), None).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn profile_page_shows_badges_and_quote() {
    let quotes = [
        "Every day is a new opportunity to nurture your mind and spirit.",
        "You're making progress, even on the days when it doesn't feel like it.",
        "Small steps every day lead to remarkable growth over time.",
        "Your commitment to self-care is inspiring and powerful.",
        "The journey to wellness is not linear, and that's perfectly okay.",
        "You're building resilience one check-in at a time.",
    ];

    let app = test_app();
    let token = register(&app, "ada@example.com", "ada").await;

    request(
        &app,
        "POST",
        "/api/mood-logs",
        Some(&token),
        Some(json!({ "mood_level": 3, "description": "steady" })),
    )
    .await;

    let (status, profile) = request(&app, "GET", "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["total_check_ins"], 1);
    assert_eq!(profile["average_mood"], 3.0);
    assert_eq!(profile["earned_badges"], 1);

    let badges = profile["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 5);
    let first_step = badges.iter().find(|b| b["id"] == "first_step").unwrap();
    assert_eq!(first_step["earned"], true);
    let centurion = badges.iter().find(|b| b["id"] == "centurion").unwrap();
    assert_eq!(centurion["earned"], false);

    let quote = profile["quote"].as_str().unwrap();
    assert!(quotes.contains(&quote));
}
