//! Request and response bodies.
//!
//! Request field names accept both the camelCase and snake_case spellings
//! used by web clients. Ids may arrive as numbers or numeric strings.

use super::error::ApiError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use trivia_core::{Category, NewQuestion, Question, QuestionId, QuizRequest, QuizScope};

/// Integer that web forms sometimes send as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    trivia_core::service::pagination::DEFAULT_PAGE
}

fn deserialize_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_page(&raw).map_err(de::Error::custom)
}

/// Parses a page number. Numerals too large for `u64` still name a page past
/// the end, so they saturate instead of failing.
fn parse_page(raw: &str) -> Result<u64, std::num::ParseIntError> {
    match raw.trim().parse::<u64>() {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        parsed => parsed,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub category: LooseInt,
    pub difficulty: LooseInt,
}

impl CreateQuestionBody {
    /// Converts to an insert payload; text validation stays with the store.
    pub fn into_new_question(self) -> Result<NewQuestion, ApiError> {
        let category = self.category.as_i64().ok_or(ApiError::BadRequest)?;
        let difficulty = self.difficulty.as_i64().ok_or(ApiError::BadRequest)?;
        Ok(NewQuestion::new(
            self.question,
            self.answer,
            category,
            difficulty,
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategoryBody {
    pub id: LooseInt,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizBody {
    #[serde(rename = "previous_questions", alias = "previousQuestions")]
    pub previous_questions: Option<Vec<QuestionId>>,
    #[serde(rename = "quiz_category", alias = "quizCategory")]
    pub quiz_category: Option<QuizCategoryBody>,
}

impl QuizBody {
    /// Checks request shape; every failure is `Unprocessable`.
    pub fn into_quiz_request(self) -> Result<QuizRequest, ApiError> {
        let previous = self.previous_questions.ok_or(ApiError::Unprocessable)?;
        let category = self.quiz_category.ok_or(ApiError::Unprocessable)?;
        if category.kind.trim().is_empty() {
            return Err(ApiError::Unprocessable);
        }
        let scope = category
            .id
            .as_i64()
            .and_then(QuizScope::from_category_id)
            .ok_or(ApiError::Unprocessable)?;
        Ok(QuizRequest::new(scope, previous))
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: Vec<Category>,
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Category,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u64,
}

#[cfg(test)]
mod tests {
    use super::{parse_page, CreateQuestionBody, LooseInt, QuizBody};
    use crate::api::error::ApiError;
    use serde_json::json;
    use trivia_core::QuizScope;

    fn quiz(value: serde_json::Value) -> Result<trivia_core::QuizRequest, ApiError> {
        serde_json::from_value::<QuizBody>(value)
            .map_err(|_| ApiError::Unprocessable)
            .and_then(QuizBody::into_quiz_request)
    }

    #[test]
    fn loose_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(LooseInt::Number(4).as_i64(), Some(4));
        assert_eq!(LooseInt::Text(" 2 ".to_string()).as_i64(), Some(2));
        assert_eq!(LooseInt::Text("two".to_string()).as_i64(), None);
    }

    #[test]
    fn page_numbers_saturate_instead_of_overflowing() {
        assert_eq!(parse_page("3"), Ok(3));
        assert_eq!(parse_page("4294967296"), Ok(4_294_967_296));
        assert_eq!(parse_page("99999999999999999999999"), Ok(u64::MAX));
        assert!(parse_page("abc").is_err());
        assert!(parse_page("-1").is_err());
        assert!(parse_page("").is_err());
    }

    #[test]
    fn quiz_body_accepts_both_spellings() {
        let snake = quiz(json!({
            "previous_questions": [1, 2],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();
        assert_eq!(snake.scope, QuizScope::Category(1));
        assert_eq!(snake.previous_questions.len(), 2);

        let camel = quiz(json!({
            "previousQuestions": [],
            "quizCategory": {"type": "all", "id": 0}
        }))
        .unwrap();
        assert_eq!(camel.scope, QuizScope::All);
    }

    #[test]
    fn quiz_body_rejects_missing_or_malformed_parts() {
        let cases = [
            json!({"quiz_category": {"type": "History", "id": 4}}),
            json!({"previous_questions": []}),
            json!({"previous_questions": [], "quiz_category": {"id": 4}}),
            json!({"previous_questions": [], "quiz_category": {"type": " ", "id": 4}}),
            json!({"previous_questions": [], "quiz_category": {"type": "x", "id": -1}}),
            json!({"previous_questions": [], "quiz_category": {"type": "x", "id": "abc"}}),
            json!({"previous_questions": [], "quiz_category": "History"}),
        ];
        for case in cases {
            assert_eq!(quiz(case.clone()).unwrap_err(), ApiError::Unprocessable, "{case}");
        }
    }

    #[test]
    fn create_body_defaults_missing_text_to_blank() {
        let body: CreateQuestionBody =
            serde_json::from_value(json!({"category": "1", "difficulty": 2})).unwrap();
        let question = body.into_new_question().unwrap();
        assert_eq!(question.question, "");
        assert_eq!(question.category, 1);
        assert!(question.validate().is_err());
    }
}
