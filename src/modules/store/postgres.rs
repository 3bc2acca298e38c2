use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::TriviaStore;

/// Postgres-backed store over the `categories` and `questions` tables.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_questions_by_category(&self, category: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = $1 ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions for category {}: {:?}", category, e);
            AppError::Database(e)
        })
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question ILIKE '%' || $1 || '%' ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get question {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn question_text_exists(&self, text: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM questions WHERE question = $1)")
            .bind(text)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check question uniqueness: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn list_quiz_candidates(
        &self,
        category: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>> {
        let excluded = excluded.to_vec();

        let result = match category {
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    "SELECT id, question, answer, category, difficulty FROM questions \
                     WHERE category = $1 AND id <> ALL($2) ORDER BY id",
                )
                .bind(category)
                .bind(excluded)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Question>(
                    "SELECT id, question, answer, category, difficulty FROM questions \
                     WHERE id <> ALL($1) ORDER BY id",
                )
                .bind(excluded)
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| {
            tracing::error!("Failed to list quiz candidates: {:?}", e);
            AppError::Database(e)
        })
    }
}
