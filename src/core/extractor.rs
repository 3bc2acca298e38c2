use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that maps every body rejection to the uniform
/// 400 error body instead of axum's plain-text rejection.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        match self.0 {
            JsonRejection::JsonDataError(err) => {
                tracing::debug!("Invalid JSON data: {}", err);
            }
            JsonRejection::JsonSyntaxError(err) => {
                tracing::debug!("Invalid JSON syntax: {}", err);
            }
            JsonRejection::MissingJsonContentType(err) => {
                tracing::debug!("Missing JSON content type: {}", err);
            }
            _ => {
                tracing::debug!("Failed to parse JSON body");
            }
        }

        AppError::BadRequest.into_response()
    }
}
