use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::models::Question;

/// Wire representation of a question.
///
/// `category` is the resolved display name (null when the stored category
/// row no longer exists) and `category_id` the stored 1-based id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub category_id: i32,
    pub difficulty: i32,
}

impl QuestionDto {
    /// Shape a stored question for the wire, resolving the category name
    /// through the given id-to-name map.
    pub fn format(question: &Question, category_names: &HashMap<i32, String>) -> Self {
        Self {
            id: question.id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: category_names.get(&question.category).cloned(),
            category_id: question.category,
            difficulty: question.difficulty,
        }
    }
}

/// Request body for `POST /questions`.
///
/// All fields are optional at the parse stage so that presence can be
/// validated explicitly; a wrong type still fails deserialization and
/// yields the same 400.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    /// 0-based API category id, sent as a string.
    pub category: Option<String>,
}

/// Request body for `POST /questions/search`. The `search` key must be
/// present; an empty string matches everything.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    pub search: Option<String>,
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
    pub categories: Vec<String>,
}

/// Response for `POST /questions/search`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Response for `GET /categories/{category_id}/questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub current_category: String,
    pub total_questions: usize,
}

/// Response for create and delete: the record's fields at the top level
/// merged with `success`, not wrapped under a `questions` key. This exact
/// shape is a compatibility requirement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionRecordResponse {
    pub success: bool,
    #[serde(flatten)]
    pub question: QuestionDto,
}
