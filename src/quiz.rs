// src/quiz.rs

//! Quiz-question selection: draw one unseen question from a category.

use crate::{
    models::question::Question,
    store::{QuestionFilter, StoreError, TriviaStore},
    utils::random::IndexPicker,
};

/// Category id that stands for "every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Picks the next quiz question.
///
/// * `category_id == 0` draws from every question; any other id must name an
///   existing category, otherwise the request is rejected as invalid.
/// * Questions whose id is in `previous` are never returned.
/// * Returns `Ok(None)` once the pool is exhausted.
pub async fn next_quiz_question(
    store: &dyn TriviaStore,
    picker: &dyn IndexPicker,
    category_id: i64,
    previous: &[i64],
) -> Result<Option<Question>, StoreError> {
    let filter = if category_id == ALL_CATEGORIES {
        QuestionFilter::all()
    } else {
        store
            .get_category(category_id)
            .await?
            .ok_or_else(|| StoreError::Invalid(format!("category {} does not exist", category_id)))?;
        QuestionFilter::in_category(category_id)
    };

    let pool = store
        .list_questions(&filter.excluding(previous.iter().copied()))
        .await?;

    Ok(pick_one(pool, picker))
}

/// Uniformly picks one element of `pool`; `None` when the pool is empty.
pub fn pick_one<T>(pool: Vec<T>, picker: &dyn IndexPicker) -> Option<T> {
    if pool.is_empty() {
        return None;
    }

    let index = picker.pick_index(pool.len());
    pool.into_iter().nth(index)
}
