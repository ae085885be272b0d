// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{QuestionFilter, StoreError, TriviaStore};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, StoreError> {
        // Unified query handling optional filters
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE TRUE",
        );

        if let Some(text) = &filter.text {
            // strpos keeps the match literal and case-sensitive, unlike LIKE wildcards
            builder.push(" AND strpos(question, ");
            builder.push_bind(text.clone());
            builder.push(") > 0");
        }

        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category);
        }

        if !filter.exclude.is_empty() {
            builder.push(" AND id <> ALL(");
            builder.push_bind(filter.exclude.clone());
            builder.push(")");
        }

        builder.push(" ORDER BY id");

        let questions = builder
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions: {:?}", e);
                StoreError::Database(e)
            })?;

        Ok(questions)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            StoreError::Database(e)
        })?;

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question: {:?}", e);
                StoreError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
