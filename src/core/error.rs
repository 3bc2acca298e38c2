use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// Application error taxonomy. Every variant maps to one of the fixed
/// wire-level error bodies; internals are logged, never exposed.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Bad request")]
    BadRequest,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable entity")]
    Unprocessable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Fixed message for each wire status, shared with the router fallbacks.
    pub fn message_for(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable Entity",
            _ => "internal server error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            _ => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(status));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
