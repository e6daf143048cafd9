use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Service for category lookups
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories)
    }

    /// Whether a category with the given id exists
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let found: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)"#)
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check category {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        Ok(found)
    }
}
