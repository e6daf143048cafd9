use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::categories::services::CategoryService;
use crate::features::questions::handlers::{self, QuestionsState};
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(questions: Arc<QuestionService>, categories: Arc<CategoryService>) -> Router {
    let state = QuestionsState {
        questions,
        categories,
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::post_questions),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .with_state(state)
}
