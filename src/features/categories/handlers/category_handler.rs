use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListResponse;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns category display names ordered by id.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of category names", body = CategoryListResponse),
        (status = 404, description = "No categories exist", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponse>> {
    let response = service.list().await?;
    Ok(Json(response))
}
