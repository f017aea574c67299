//! PHQ-9 scoring and interpretation.
//!
//! The questionnaire is fixed: nine items, each answered 0-3, total
//! 0-27. Severity bands are closed, contiguous, and exhaustive over the
//! full range. This is a screening tool, not a diagnostic instrument.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AppError, AppResult};

pub const PHQ9_ITEMS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself or that you are a failure",
    "Trouble concentrating on things",
    "Moving or speaking slowly, or being fidgety or restless",
    "Thoughts that you would be better off dead",
];

pub const PHQ9_OPTIONS: [(u8, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

pub const MAX_SCORE: u8 = 27;

/// Sum a complete response set.
///
/// Requires exactly one answer per item index `0..=8`, each in `0..=3`.
/// An incomplete set is rejected so a partial submission can never be
/// scored as if the missing items were zero.
pub fn score(responses: &BTreeMap<u8, u8>) -> AppResult<u8> {
    for (&question, &answer) in responses {
        if usize::from(question) >= PHQ9_ITEMS.len() {
            return Err(AppError::Validation(format!(
                "Unknown question index {question}"
            )));
        }
        if answer > 3 {
            return Err(AppError::Validation(format!(
                "Answer for question {question} must be between 0 and 3"
            )));
        }
    }
    if responses.len() < PHQ9_ITEMS.len() {
        return Err(AppError::IncompleteResponse {
            answered: responses.len(),
            required: PHQ9_ITEMS.len(),
        });
    }
    Ok(responses.values().sum())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interpretation {
    pub level: Severity,
    pub severity_rank: u8,
    pub color: &'static str,
    pub message: &'static str,
}

/// Map a total score to its severity band.
pub fn interpret(score: u8) -> Interpretation {
    let (level, color, message) = match score {
        0..=4 => (
            Severity::Minimal,
            "green",
            "Minimal or no depression detected.",
        ),
        5..=9 => (
            Severity::Mild,
            "yellow",
            "Mild depression. Consider monitoring your mood.",
        ),
        10..=14 => (
            Severity::Moderate,
            "orange",
            "Moderate depression. Consider talking to someone you trust.",
        ),
        15..=19 => (
            Severity::ModeratelySevere,
            "red",
            "Moderately severe depression. Professional support is recommended.",
        ),
        _ => (
            Severity::Severe,
            "red",
            "Severe depression. Please seek professional help.",
        ),
    };
    Interpretation {
        level,
        severity_rank: level.rank(),
        color,
        message,
    }
}
