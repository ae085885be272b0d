// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuestionFilter, StoreError, TriviaStore, seed};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    /// Kept sorted by id.
    questions: Vec<Question>,
    /// Like a serial column, ids are never handed out twice.
    next_id: i64,
}

/// In-process store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_id = questions.last().map_or(1, |q| q.id + 1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_id,
            }),
        }
    }

    /// A store pre-loaded with the stock trivia data set.
    pub fn seeded() -> Self {
        Self::new(seed::categories(), seed::questions())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id.max(1);
        tables.next_id = id + 1;

        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.push(question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::NotFound)?;
        tables.questions.remove(index);

        Ok(())
    }
}
