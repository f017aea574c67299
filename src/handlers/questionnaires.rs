use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::questionnaire::{
    QuestionnaireQuery, QuestionnaireResponse, SubmitQuestionnaireRequest,
};
use crate::services::assessment::{self, Interpretation};
use crate::store::Collection;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionnaireResult {
    #[serde(flatten)]
    pub questionnaire: QuestionnaireResponse,
    pub interpretation: Interpretation,
}

/// Static PHQ-9 form definition for the client to render.
pub async fn phq9_metadata() -> Json<Value> {
    let options: Vec<Value> = assessment::PHQ9_OPTIONS
        .iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();

    Json(json!({
        "questionnaire_type": "PHQ-9",
        "title": "PHQ-9 Assessment",
        "subtitle": "Patient Health Questionnaire",
        "instructions": "Over the last 2 weeks, how often have you been bothered by any of the following problems?",
        "items": assessment::PHQ9_ITEMS,
        "options": options,
        "max_score": assessment::MAX_SCORE,
    }))
}

pub async fn submit_questionnaire(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SubmitQuestionnaireRequest>,
) -> AppResult<Json<QuestionnaireResult>> {
    let score = assessment::score(&body.responses)?;
    let interpretation = assessment::interpret(score);

    let questionnaire = QuestionnaireResponse {
        id: Uuid::new_v4(),
        user_id: auth_user.id,
        questionnaire_type: body.questionnaire_type,
        responses: body.responses,
        score: Some(score),
        created_at: Utc::now(),
    };
    state.store.append(Collection::Questionnaires, &questionnaire)?;

    tracing::info!(
        user_id = %auth_user.id,
        score = score,
        level = ?interpretation.level,
        "Assessment submitted"
    );

    Ok(Json(QuestionnaireResult {
        questionnaire,
        interpretation,
    }))
}

pub async fn list_questionnaires(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<QuestionnaireQuery>,
) -> AppResult<Json<Vec<QuestionnaireResult>>> {
    let all: Vec<QuestionnaireResponse> = state.store.load(Collection::Questionnaires)?;
    let mut mine: Vec<QuestionnaireResponse> = all
        .into_iter()
        .filter(|q| q.user_id == auth_user.id)
        .collect();
    mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = query.limit {
        mine.truncate(limit);
    }

    let results = mine
        .into_iter()
        .map(|q| {
            let interpretation = assessment::interpret(q.score.unwrap_or(0));
            QuestionnaireResult {
                questionnaire: q,
                interpretation,
            }
        })
        .collect();

    Ok(Json(results))
}
