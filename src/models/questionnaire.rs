use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed assessment. `responses` maps question index (0-based) to
/// the chosen option score; `score` is the sum, filled in at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub questionnaire_type: String,
    pub responses: BTreeMap<u8, u8>,
    pub score: Option<u8>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuestionnaireRequest {
    #[serde(default = "default_questionnaire_type")]
    pub questionnaire_type: String,
    pub responses: BTreeMap<u8, u8>,
}

fn default_questionnaire_type() -> String {
    "PHQ-9".into()
}

#[derive(Debug, Deserialize)]
pub struct QuestionnaireQuery {
    pub limit: Option<usize>,
}
