use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers::{self, CategoryQuestionsState};
use crate::features::categories::services::CategoryService;
use crate::features::questions::services::QuestionService;

/// Create routes for the categories feature
pub fn routes(categories: Arc<CategoryService>, questions: Arc<QuestionService>) -> Router {
    let by_category_state = CategoryQuestionsState {
        categories: Arc::clone(&categories),
        questions,
    };

    let list_routes = Router::new()
        .route("/categories", get(handlers::list_categories))
        .with_state(categories);

    let by_category_routes = Router::new()
        .route(
            "/categories/{id}/questions",
            get(handlers::questions_by_category),
        )
        .with_state(by_category_state);

    list_routes.merge(by_category_routes)
}
