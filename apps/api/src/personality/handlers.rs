use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::{require, AppError};
use crate::personality::assessment::{AnswerSheet, PersonalityReport, MAX_ANSWER, MIN_ANSWER};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct PersonalityRequest {
    pub answers: Option<Vec<Answer>>,
}

/// POST /personality-assessment
///
/// Scores the five dimensions and derives profile text, careers and traits.
pub async fn handle_personality_assessment(
    State(state): State<AppState>,
    payload: Result<Json<PersonalityRequest>, JsonRejection>,
) -> Result<Json<PersonalityReport>, AppError> {
    let Json(request) = payload?;
    let answers = require(request.answers, "answers")?;

    let mut sheet = AnswerSheet::new(state.catalogs.personality);
    for answer in &answers {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&answer.value) {
            return Err(AppError::Validation(format!(
                "Answer to '{}' must be between {MIN_ANSWER} and {MAX_ANSWER}, got {}",
                answer.question_id, answer.value
            )));
        }
        sheet.record(&answer.question_id, answer.value);
    }

    Ok(Json(sheet.score()))
}
