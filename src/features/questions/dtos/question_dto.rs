use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::{to_category_map, CategoryMap};
use crate::features::categories::models::Category;
use crate::features::questions::models::Question;

/// Wire representation of a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// Distinct category ids of a result set, ascending.
///
/// The original served `current_category` as a mix of ints and strings; here
/// it is always a list of integer category ids.
pub fn current_categories(questions: &[QuestionDto]) -> Vec<i64> {
    questions
        .iter()
        .map(|q| q.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Response body for `GET /questions` and `GET /categories/{id}/questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Vec<i64>,
}

impl QuestionListResponse {
    pub fn new(
        questions: Vec<Question>,
        total_questions: i64,
        categories: Vec<Category>,
        current_category: Vec<i64>,
    ) -> Self {
        Self {
            success: true,
            questions: questions.into_iter().map(Into::into).collect(),
            total_questions,
            categories: to_category_map(categories),
            current_category,
        }
    }
}

/// Response body for a search via `POST /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub current_category: Vec<i64>,
}

impl SearchResponse {
    pub fn new(questions: Vec<Question>) -> Self {
        let questions: Vec<QuestionDto> = questions.into_iter().map(Into::into).collect();
        let current_category = current_categories(&questions);
        Self {
            success: true,
            total_questions: questions.len() as i64,
            questions,
            current_category,
        }
    }
}

/// Response body for a create via `POST /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub total_questions: i64,
}

/// Response body for `DELETE /questions/{id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub message: String,
}

/// Validated payload for inserting a question
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i64,
    pub category: i64,
}

/// Body of `POST /questions`, which multiplexes search and create.
///
/// `search_term` is double-optional so an explicit JSON null (rejected with
/// 400) can be told apart from an absent key (create path).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPostDto {
    #[serde(default, deserialize_with = "some_nullable")]
    #[schema(value_type = Option<String>)]
    pub search_term: Option<Option<String>>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

fn some_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl QuestionPostDto {
    /// Interpret the multiplexed body as either a search or a create.
    pub fn into_request(self) -> Option<QuestionPostRequest> {
        if let Some(term) = self.search_term {
            return Some(QuestionPostRequest::Search(term));
        }

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                Some(QuestionPostRequest::Create(CreateQuestionDto {
                    question,
                    answer,
                    difficulty,
                    category,
                }))
            }
            _ => None,
        }
    }
}

/// Disambiguated `POST /questions` request
#[derive(Debug)]
pub enum QuestionPostRequest {
    /// `searchTerm` was present; `None` means it was JSON null
    Search(Option<String>),
    Create(CreateQuestionDto),
}
