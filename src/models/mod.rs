pub mod chat_message;
pub mod mood_log;
pub mod profile;
pub mod questionnaire;
pub mod user;
