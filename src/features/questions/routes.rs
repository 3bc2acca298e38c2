use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature, including the per-category
/// listing that lives under the /categories path.
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/{question_id}", delete(handlers::delete_question))
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::list_questions_in_category),
        )
        .with_state(service)
}
