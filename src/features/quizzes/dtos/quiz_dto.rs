use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;
use crate::features::questions::models::Question;
use crate::shared::constants::ALL_CATEGORIES;

/// Category selector sent by quiz clients.
///
/// Clients send `id` as either a JSON number or a numeric string; both are
/// accepted. Id 0 means "all categories".
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "lenient_i64")]
    #[schema(value_type = i64)]
    pub id: i64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Request body for `POST /quizzes`
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategoryDto>,
}

impl QuizRequestDto {
    /// Effective category filter; a missing selector means all categories
    pub fn category_id(&self) -> i64 {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .unwrap_or(ALL_CATEGORIES)
    }
}

/// Response body for `POST /quizzes`; `current_question` is null once the
/// candidate pool is exhausted
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    pub previous_questions: Vec<i64>,
    pub current_question: Option<QuestionDto>,
}

impl QuizResponseDto {
    pub fn new(previous_questions: Vec<i64>, current_question: Option<Question>) -> Self {
        Self {
            success: true,
            previous_questions,
            current_question: current_question.map(Into::into),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom("category id is not an integer")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("category id is not numeric: {s:?}"))),
        _ => Err(de::Error::custom("category id must be a number or string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_accepts_number_and_string() {
        let numeric: QuizRequestDto = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"type": "Science", "id": 1}}"#,
        )
        .unwrap();
        assert_eq!(numeric.category_id(), 1);

        let stringly: QuizRequestDto = serde_json::from_str(
            r#"{"previous_questions": [2], "quiz_category": {"type": "Science", "id": "0"}}"#,
        )
        .unwrap();
        assert_eq!(stringly.category_id(), 0);
        assert_eq!(stringly.previous_questions, vec![2]);
    }

    #[test]
    fn missing_selector_means_all_categories() {
        let body: QuizRequestDto = serde_json::from_str(r#"{"previous_questions": []}"#).unwrap();
        assert_eq!(body.category_id(), ALL_CATEGORIES);
    }

    #[test]
    fn non_numeric_category_id_is_rejected() {
        let result: Result<QuizRequestDto, _> = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"id": "Science"}}"#,
        );
        assert!(result.is_err());
    }
}
