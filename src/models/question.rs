// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::utils::de::optional_int;

/// Represents the 'questions' table in the database.
///
/// Field order matches the JSON shape clients expect:
/// `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    pub difficulty: i32,

    /// Id of the owning category. Not enforced as a foreign key.
    pub category: i64,
}

/// A question that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question.
///
/// Every field is optional at the serde level so that a missing field
/// surfaces as a validation failure instead of a body rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(required)]
    pub question: Option<String>,
    #[validate(required)]
    pub answer: Option<String>,
    #[validate(required)]
    #[serde(default, deserialize_with = "optional_int")]
    pub category: Option<i64>,
    #[validate(required)]
    #[serde(default, deserialize_with = "optional_int")]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    /// Validates the payload and converts it into an insertable row.
    pub fn into_new_question(self) -> Result<NewQuestion, String> {
        self.validate().map_err(|e| e.to_string())?;

        match (self.question, self.answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err("question, answer, category and difficulty are required".to_string()),
        }
    }
}

/// DTO for the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(default, deserialize_with = "optional_int")]
    pub page: Option<i64>,
}
