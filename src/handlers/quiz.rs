// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::quiz::QuizRequest,
    quiz::next_quiz_question,
    state::SharedPicker,
    store::SharedStore,
};

/// Returns a random question the player has not seen yet.
///
/// Body: `{previous_questions: [ids], quiz_category: {id}}`, where id `0`
/// means every category. Responds with `{question: null}` once the
/// category is exhausted.
pub async fn next_question(
    State(store): State<SharedStore>,
    State(picker): State<SharedPicker>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let (category_id, previous) = payload.into_parts().map_err(AppError::Unprocessable)?;

    let question =
        next_quiz_question(store.as_ref(), picker.as_ref(), category_id, &previous).await?;

    if question.is_none() {
        tracing::debug!("Quiz pool exhausted for category {}", category_id);
    }

    Ok(Json(json!({ "question": question })))
}
