use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::questions::dtos::{
    CategoryQuestionsResponse, CreateQuestionDto, QuestionListResponse, QuestionRecordResponse,
    SearchQuestionsDto, SearchResultsResponse,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions
///
/// Returns one page of all questions with the pre-pagination total, the
/// category name list and the constant `current_category: "all"`.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Page beyond the last", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>> {
    let response = service.list_page(query.page()).await?;
    Ok(Json(response))
}

/// Delete a question
///
/// Echoes the deleted record's fields at the top level of the response.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionRecordResponse),
        (status = 404, description = "No such question", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionRecordResponse>> {
    // A non-numeric id is indistinguishable from an unknown route
    let question_id: i32 = question_id.parse().map_err(|_| AppError::NotFound)?;
    let response = service.delete(question_id).await?;
    Ok(Json(response))
}

/// Create a question
///
/// All four fields are required; the question text must be unique and the
/// category is the 0-based API id sent as a string.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = QuestionRecordResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<QuestionRecordResponse>> {
    let response = service.create(dto).await?;
    Ok(Json(response))
}

/// Search questions
///
/// Case-insensitive substring match; an empty match set is a valid result.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    params(PageQuery),
    responses(
        (status = 200, description = "Matching questions", body = SearchResultsResponse),
        (status = 400, description = "Missing search key", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchResultsResponse>> {
    let term = dto.search.ok_or(AppError::BadRequest)?;
    let response = service.search(&term, query.page()).await?;
    Ok(Json(response))
}

/// List questions in a category
///
/// The path id is the 0-based API category id.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i64, Path, description = "0-based category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "Unknown category or page beyond the last", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions_in_category(
    State(service): State<Arc<QuestionService>>,
    Path(category_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>> {
    let category_id: i64 = category_id.parse().map_err(|_| AppError::NotFound)?;
    let response = service
        .list_by_category(category_id, query.page())
        .await?;
    Ok(Json(response))
}
