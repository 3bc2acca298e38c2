use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::modules::store::TriviaStore;
use crate::shared::types::to_stored_category_id;

/// The category type sent by clients to play across all categories.
const ALL_CATEGORIES: &str = "click";

/// Service for quiz rounds: picks a random question the player has not
/// seen yet.
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Draw the next question for a round.
    ///
    /// The candidate pool excludes `previous_questions` and, unless the
    /// category type is the all-categories sentinel, is restricted to the
    /// requested category. A question is drawn only when the pool holds
    /// more than one candidate; with zero or one candidate the selection
    /// stays null and the client ends the round.
    pub async fn next_question(&self, request: QuizRequestDto) -> Result<QuizResponseDto> {
        let quiz_category = request.quiz_category.ok_or(AppError::BadRequest)?;

        let category_filter = if quiz_category.category_type == ALL_CATEGORIES {
            None
        } else {
            match to_stored_category_id(quiz_category.id) {
                Some(id) => Some(id),
                // An id outside the stored range names no category, so the
                // pool is empty and the round ends.
                None => {
                    return Ok(QuizResponseDto {
                        success: true,
                        questions: None,
                        category: quiz_category.category_type,
                        total_questions: 0,
                        question: None,
                    });
                }
            }
        };

        let pool = self
            .store
            .list_quiz_candidates(category_filter, &request.previous_questions)
            .await?;
        let total_questions = pool.len();

        let selected = if pool.len() > 1 {
            let categories = self.store.list_categories().await?;
            let names: HashMap<i32, String> = categories
                .into_iter()
                .map(|c| (c.id, c.category_type))
                .collect();

            pool.choose(&mut rand::thread_rng())
                .map(|q| QuestionDto::format(q, &names))
        } else {
            None
        };

        Ok(QuizResponseDto {
            success: true,
            questions: selected.clone(),
            category: quiz_category.category_type,
            total_questions,
            question: selected,
        })
    }
}
