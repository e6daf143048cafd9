use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::shared::constants::ALL_CATEGORIES;

/// Service drawing quiz questions
pub struct QuizService {
    pool: SqlitePool,
}

impl QuizService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Draw one unseen question uniformly at random.
    ///
    /// Candidates are the questions in `category` (or every category when the
    /// sentinel 0 is given) whose ids are not in `previous`. Returns `None`
    /// once the pool is exhausted.
    pub async fn draw(&self, category: i64, previous: &[i64]) -> Result<Option<Question>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, question, answer, difficulty, category, created_at FROM questions",
        );
        builder.push(" WHERE 1 = 1");

        if category != ALL_CATEGORIES {
            builder.push(" AND category = ").push_bind(category);
        }

        if !previous.is_empty() {
            builder.push(" AND id NOT IN (");
            {
                let mut ids = builder.separated(", ");
                for id in previous {
                    ids.push_bind(*id);
                }
            }
            builder.push(")");
        }

        builder.push(" ORDER BY RANDOM() LIMIT 1");

        let question = builder
            .build_query_as::<Question>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to draw quiz question: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(question)
    }
}
