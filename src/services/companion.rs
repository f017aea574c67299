//! Canned-text generation: companion chat replies, low-mood
//! encouragements, and profile quotes.
//!
//! Reply selection is keyword matching over fixed pools — the first
//! matching category wins, then a random pick within that pool. All
//! randomness flows through the caller-supplied `Rng` so tests can pin
//! a seeded generator.

use rand::Rng;

const SAD_REPLIES: [&str; 3] = [
    "I hear you. It sounds like today has been quite intense — would you like to tell me more?",
    "It's okay to feel this way. Your emotions are valid, and I'm here to listen without judgment.",
    "Thank you for sharing that with me. Sometimes just expressing how we feel can bring a bit of relief.",
];

const ANXIOUS_REPLIES: [&str; 3] = [
    "Anxiety can feel overwhelming. Let's take this one step at a time. What's weighing on your mind right now?",
    "It's completely normal to feel anxious. Would it help to talk through what's making you feel this way?",
    "I'm here with you. Remember, every feeling passes, even the difficult ones.",
];

const HAPPY_REPLIES: [&str; 3] = [
    "That's wonderful to hear! What's bringing you joy today?",
    "I'm so glad you're feeling good. These moments are precious — savor them!",
    "Your positive energy is beautiful. Keep nurturing what makes you feel this way.",
];

const TIRED_REPLIES: [&str; 3] = [
    "It sounds like you've been carrying a lot. Rest is not a luxury, it's a necessity.",
    "Your body and mind are asking for care. What would help you feel more rested?",
    "Being tired is your system's way of telling you it needs attention. Listen to it.",
];

const DEFAULT_REPLIES: [&str; 5] = [
    "I appreciate you sharing that with me. Every step you take to understand your feelings is a form of courage.",
    "Thank you for opening up. How does it feel to express these thoughts?",
    "I'm listening. Would you like to explore this feeling a bit more?",
    "That must be a lot to carry. You're doing your best, and that's what matters.",
    "Your awareness of your emotions shows real strength. Keep being honest with yourself.",
];

/// Shown on the dashboard after a low-mood (level <= 2) check-in.
const ENCOURAGEMENTS: [&str; 4] = [
    "Take a deep breath, today might be heavy, but you're stronger than you think.",
    "Even the sun rests behind the clouds before shining again.",
    "You're doing your best, and that's all that matters today.",
    "Every emotion is valid. Let yourself feel, and know that tomorrow is a new beginning.",
];

/// Shown on the profile page.
const MOTIVATIONAL_QUOTES: [&str; 6] = [
    "Every day is a new opportunity to nurture your mind and spirit.",
    "You're making progress, even on the days when it doesn't feel like it.",
    "Small steps every day lead to remarkable growth over time.",
    "Your commitment to self-care is inspiring and powerful.",
    "The journey to wellness is not linear, and that's perfectly okay.",
    "You're building resilience one check-in at a time.",
];

const SAD_KEYWORDS: [&str; 3] = ["sad", "down", "depressed"];
const ANXIOUS_KEYWORDS: [&str; 3] = ["anxious", "worried", "stress"];
const HAPPY_KEYWORDS: [&str; 3] = ["happy", "good", "great"];
const TIRED_KEYWORDS: [&str; 3] = ["tired", "exhausted", "drained"];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn pick<R: Rng>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate the assistant's reply to a user message.
pub fn reply_to<R: Rng>(message: &str, rng: &mut R) -> &'static str {
    let lower = message.to_lowercase();

    let pool: &[&'static str] = if contains_any(&lower, &SAD_KEYWORDS) {
        &SAD_REPLIES
    } else if contains_any(&lower, &ANXIOUS_KEYWORDS) {
        &ANXIOUS_REPLIES
    } else if contains_any(&lower, &HAPPY_KEYWORDS) {
        &HAPPY_REPLIES
    } else if contains_any(&lower, &TIRED_KEYWORDS) {
        &TIRED_REPLIES
    } else {
        &DEFAULT_REPLIES
    };

    pick(pool, rng)
}

/// Seeded into an empty conversation on first read.
pub fn welcome(username: &str) -> String {
    format!(
        "Hi {username}, I'm Bloom, your emotional wellness companion. \
         I'm here to listen and support you. How are you feeling today?"
    )
}

pub fn encouragement<R: Rng>(rng: &mut R) -> &'static str {
    pick(&ENCOURAGEMENTS, rng)
}

pub fn motivational_quote<R: Rng>(rng: &mut R) -> &'static str {
    pick(&MOTIVATIONAL_QUOTES, rng)
}
