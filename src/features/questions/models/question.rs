use sqlx::FromRow;

/// Database model for a trivia question. `category` holds the stored
/// 1-based category id.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Fields for inserting a new question; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
