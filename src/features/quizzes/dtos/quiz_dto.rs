use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;

/// Request body for `POST /quizzes`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Required; `None` after parsing means the key was missing or null.
    pub quiz_category: Option<QuizCategoryDto>,
    /// Question ids already played this round.
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Category selector for a quiz round. The sentinel type `"click"` means
/// "all categories"; otherwise `id` is the 0-based API category id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(rename = "type")]
    pub category_type: String,
    pub id: i64,
}

/// Response for `POST /quizzes`. The selected question is duplicated under
/// `questions` and `question` for client compatibility.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub questions: Option<QuestionDto>,
    pub category: String,
    pub total_questions: usize,
    pub question: Option<QuestionDto>,
}
