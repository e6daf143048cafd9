use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::CreateQuestionDto;
use crate::features::questions::models::Question;
use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::types::PageQuery;

/// Service for question storage and retrieval
pub struct QuestionService {
    pool: SqlitePool,
}

impl QuestionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// One fixed-size page of questions plus the full table count.
    ///
    /// A page past the end of the table (including page 1 of an empty table)
    /// is a not-found, matching the pagination contract.
    pub async fn paginated(&self, page: i64) -> Result<(Vec<Question>, i64)> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })?;

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category, created_at
            FROM questions
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(QUESTIONS_PER_PAGE)
        .bind(PageQuery::offset(page))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions page {}: {:?}", page, e);
            AppError::Database(e)
        })?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "no questions on page {} (total {})",
                page, total
            )));
        }

        Ok((questions, total))
    }

    /// Case-insensitive substring search on the question text
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category, created_at
            FROM questions
            WHERE question LIKE '%' || ? || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(questions)
    }

    /// All questions in one category
    pub async fn in_category(&self, category: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category, created_at
            FROM questions
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions for category {}: {:?}", category, e);
            AppError::Database(e)
        })?;

        Ok(questions)
    }

    /// Insert a question, returning its new id
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&dto.question)
        .bind(&dto.answer)
        .bind(dto.difficulty)
        .bind(dto.category)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Question created: id={}, category={}", id, dto.category);

        Ok(id)
    }

    /// Delete a question by id; deleting an absent id is a not-found
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("question {} does not exist", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }

    /// Full table count
    pub async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(total)
    }
}
