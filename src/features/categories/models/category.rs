use sqlx::FromRow;

/// Database model for a trivia category. Rows are seeded by the initial
/// migration and never mutated through the API.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub category_type: String,
}
