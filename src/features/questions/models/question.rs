use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a trivia question
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
    pub created_at: DateTime<Utc>,
}
