// src/handlers/category.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    store::{QuestionFilter, SharedStore},
    utils::pagination::paginate,
};

/// Lists every category.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;

    Ok(Json(json!({ "categories": categories })))
}

/// Lists the first page of questions belonging to one category.
///
/// `total_questions` counts the returned page, not every match.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|e| AppError::NotFound(e.body_text()))?;

    let current_category = store
        .get_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let questions = store
        .list_questions(&QuestionFilter::in_category(id))
        .await?;
    let page = paginate(1, &questions);
    let categories = store.list_categories().await?;

    Ok(Json(json!({
        "questions": page,
        "total_questions": page.len(),
        "categories": categories,
        "current_category": current_category,
    })))
}
