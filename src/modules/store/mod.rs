//! Persistence seam for the trivia entities.
//!
//! Handlers and services depend only on the [`TriviaStore`] trait, so the
//! HTTP layer can be exercised against an in-memory implementation in tests
//! while production wires in the Postgres-backed [`PgStore`].

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Repository interface over the two persisted entity types.
///
/// All question listings are ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn list_questions_by_category(&self, category: i32) -> Result<Vec<Question>>;

    /// Case-insensitive substring match against the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>>;

    async fn question_text_exists(&self, text: &str) -> Result<bool>;

    async fn create_question(&self, new: NewQuestion) -> Result<Question>;

    async fn delete_question(&self, id: i32) -> Result<()>;

    /// Questions eligible for a quiz round: optionally restricted to one
    /// stored category id, always excluding the given question ids.
    async fn list_quiz_candidates(
        &self,
        category: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>>;
}
