// src/models/quiz.rs

use serde::Deserialize;

use crate::utils::de::optional_int;

/// Category selector sent by the quiz client. Id `0` means "all categories".
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "optional_int")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// DTO for requesting the next quiz question.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Returns `(category_id, previous_question_ids)`, or a description of the missing field.
    pub fn into_parts(self) -> Result<(i64, Vec<i64>), String> {
        let previous = self
            .previous_questions
            .ok_or_else(|| "previous_questions is required".to_string())?;
        let category_id = self
            .quiz_category
            .and_then(|c| c.id)
            .ok_or_else(|| "quiz_category.id is required".to_string())?;

        Ok((category_id, previous))
    }
}
