use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Play a quiz round
///
/// Draws a random question from the requested category (or all categories
/// for the `"click"` type) that is not in `previous_questions`.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Quiz round result", body = QuizResponseDto),
        (status = 400, description = "Missing quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let response = service.next_question(request).await?;
    Ok(Json(response))
}
