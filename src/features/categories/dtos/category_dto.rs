use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for `GET /categories`: display names ordered by id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<String>,
}
