use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::category_handler::list_categories,
        categories_handlers::category_handler::questions_by_category,
        // Questions
        questions_handlers::question_handler::list_questions,
        questions_handlers::question_handler::post_questions,
        questions_handlers::question_handler::delete_question,
        // Quizzes
        quizzes_handlers::quiz_handler::generate_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Categories
            categories_dtos::CategoryListResponse,
            // Questions
            questions_dtos::QuestionDto,
            questions_dtos::QuestionListResponse,
            questions_dtos::SearchResponse,
            questions_dtos::CreateQuestionDto,
            questions_dtos::CreateQuestionResponse,
            questions_dtos::DeleteQuestionResponse,
            questions_dtos::QuestionPostDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia category listing"),
        (name = "questions", description = "Question CRUD and search"),
        (name = "quizzes", description = "Quiz generation"),
    )
)]
pub struct ApiDoc;

/// Injects runtime-configured info into the generated document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
