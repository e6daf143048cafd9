use sqlx::FromRow;

/// Database model for a trivia category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
}
