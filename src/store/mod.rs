// src/store/mod.rs

//! Persistence layer. Owns the `categories` and `questions` tables; handlers
//! only read through it and mutate through `insert_question` / `delete_question`.

mod memory;
mod postgres;
pub mod seed;

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Typed failures of the persistence layer.
#[derive(Debug)]
pub enum StoreError {
    /// The addressed row does not exist.
    NotFound,

    /// The request reached the store but cannot be satisfied (bad reference, rejected input).
    Invalid(String),

    Database(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "record not found"),
            StoreError::Invalid(msg) => write!(f, "invalid request: {}", msg),
            StoreError::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Predicate for listing questions. The default filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Case-sensitive substring of the question text.
    pub text: Option<String>,

    pub category: Option<i64>,

    /// Ids that must not appear in the result.
    pub exclude: Vec<i64>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn containing(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn in_category(category: i64) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.exclude.extend(ids);
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.text
            .as_deref()
            .is_none_or(|t| question.question.contains(t))
            && self.category.is_none_or(|c| question.category == c)
            && !self.exclude.contains(&question.id)
    }
}

/// Storage backend for trivia data.
///
/// Every successful insert or delete is durable before the call returns.
/// Listings are ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError>;

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Fails with `StoreError::NotFound` when no row has this id.
    async fn delete_question(&self, id: i64) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn TriviaStore>;
