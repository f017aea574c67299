pub mod auth;
pub mod chat;
pub mod health;
pub mod mood_logs;
pub mod profile;
pub mod questionnaires;
