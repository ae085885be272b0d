// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
/// Categories are seeded out-of-band and never modified through the API.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name of the category (e.g., "Art", "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

impl Category {
    pub fn new(id: i64, category_type: impl Into<String>) -> Self {
        Self {
            id,
            category_type: category_type.into(),
        }
    }
}
