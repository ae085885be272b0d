// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, SearchRequest},
    store::{QuestionFilter, SharedStore},
    utils::pagination::paginate,
};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// Lists all questions, ten per page.
///
/// A missing or unparseable `page` falls back to the first page.
pub async fn list_questions(
    State(store): State<SharedStore>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.ok().and_then(|Query(p)| p.page).unwrap_or(1);

    let questions = store.list_questions(&QuestionFilter::all()).await?;
    let categories = store.list_categories().await?;

    Ok(Json(json!({
        "questions": paginate(page, &questions),
        "total_questions": questions.len(),
        "categories": categories,
        "current_category": "ALL",
    })))
}

/// Creates a question from `{question, answer, category, difficulty}`.
pub async fn create_question(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let new = payload
        .into_new_question()
        .map_err(AppError::Unprocessable)?;

    let created = store.insert_question(new).await?;
    tracing::info!("Question {} added to category {}", created.id, created.category);

    Ok(Json(json!({ "status": "question added" })))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|e| AppError::NotFound(e.body_text()))?;

    store.delete_question(id).await?;
    tracing::info!("Question {} deleted", id);

    Ok(Json(json!({ "status": "deleted" })))
}

/// Case-sensitive substring search over question text.
///
/// `total_questions` counts the returned page, not every match.
pub async fn search_questions(
    State(store): State<SharedStore>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let term = payload
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unprocessable("searchTerm is required".to_string()))?;
    let page = payload.page.unwrap_or(1);

    tracing::debug!("Searching questions for {:?}", term);

    let matching = store
        .list_questions(&QuestionFilter::containing(term))
        .await?;
    let current_page = paginate(page, &matching);
    let categories = store.list_categories().await?;

    Ok(Json(json!({
        "questions": current_page,
        "total_questions": current_page.len(),
        "categories": categories,
        "current_category": "ALL",
    })))
}
