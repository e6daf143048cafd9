use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryListResponse;
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::QuestionListResponse;
use crate::features::questions::services::QuestionService;
use crate::shared::types::ErrorBody;

/// State for the per-category question listing, which joins both services
#[derive(Clone)]
pub struct CategoryQuestionsState {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
}

/// List all trivia categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to display type", body = CategoryListResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponse>> {
    let categories = service.list().await?;
    Ok(Json(CategoryListResponse::new(categories)))
}

/// List every question belonging to one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = QuestionListResponse),
        (status = 404, description = "Unknown category", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn questions_by_category(
    State(state): State<CategoryQuestionsState>,
    Path(id): Path<i64>,
) -> Result<Json<QuestionListResponse>> {
    if !state.categories.exists(id).await? {
        return Err(AppError::NotFound(format!("category {} does not exist", id)));
    }

    let questions = state.questions.in_category(id).await?;
    let total = questions.len() as i64;
    let categories = state.categories.list().await?;

    Ok(Json(QuestionListResponse::new(
        questions,
        total,
        categories,
        vec![id],
    )))
}
