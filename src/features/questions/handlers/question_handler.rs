use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::to_category_map;
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::{
    current_categories, CreateQuestionResponse, DeleteQuestionResponse, QuestionDto,
    QuestionListResponse, QuestionPostDto, QuestionPostRequest, SearchResponse,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorBody, PageQuery};

/// State for question handlers; the paginated listing also needs the
/// category map, so both services ride along.
#[derive(Clone)]
pub struct QuestionsState {
    pub questions: Arc<QuestionService>,
    pub categories: Arc<CategoryService>,
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed page parameter", body = ErrorBody),
        (status = 404, description = "Page out of range", body = ErrorBody)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(state): State<QuestionsState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>> {
    let page = query.page()?;
    let (questions, total) = state.questions.paginated(page).await?;
    let categories = state.categories.list().await?;

    let dtos: Vec<QuestionDto> = questions.into_iter().map(Into::into).collect();
    let current_category = current_categories(&dtos);

    Ok(Json(QuestionListResponse {
        success: true,
        questions: dtos,
        total_questions: total,
        categories: to_category_map(categories),
        current_category,
    }))
}

/// Search questions or create one, depending on the body.
///
/// A body with a `searchTerm` key runs a case-insensitive substring search
/// (an explicit null term is a bad request); a body with the full question
/// fields inserts a new question; anything else is a bad request.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionPostDto,
    responses(
        (status = 200, description = "Search results or created question id"),
        (status = 400, description = "Null search term or invalid fields", body = ErrorBody)
    ),
    tag = "questions"
)]
pub async fn post_questions(
    State(state): State<QuestionsState>,
    AppJson(body): AppJson<QuestionPostDto>,
) -> Result<Response> {
    match body.into_request() {
        Some(QuestionPostRequest::Search(None)) => {
            Err(AppError::BadRequest("search term is null".to_string()))
        }
        Some(QuestionPostRequest::Search(Some(term))) => {
            let questions = state.questions.search(&term).await?;
            Ok(Json(SearchResponse::new(questions)).into_response())
        }
        Some(QuestionPostRequest::Create(dto)) => {
            dto.validate()
                .map_err(|e| AppError::BadRequest(format!("invalid question: {}", e)))?;

            let created = state.questions.create(dto).await?;
            let total_questions = state.questions.count().await?;

            Ok(Json(CreateQuestionResponse {
                success: true,
                created,
                total_questions,
            })
            .into_response())
        }
        None => Err(AppError::BadRequest(
            "body must carry a searchTerm or full question fields".to_string(),
        )),
    }
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Unknown question id", body = ErrorBody)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(state): State<QuestionsState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteQuestionResponse>> {
    state.questions.delete(id).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        message: "question deleted".to_string(),
    }))
}
