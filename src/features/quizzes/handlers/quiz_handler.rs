use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorBody;

/// Draw the next quiz question
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next unseen question, or null when exhausted", body = QuizResponseDto),
        (status = 400, description = "Malformed body", body = ErrorBody)
    ),
    tag = "quizzes"
)]
pub async fn generate_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(body): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let category = body.category_id();
    let question = service.draw(category, &body.previous_questions).await?;

    Ok(Json(QuizResponseDto::new(
        body.previous_questions,
        question,
    )))
}
