//! Question domain model.
//!
//! # Responsibility
//! - Define the persisted question record and its insert payload.
//! - Validate required text fields before persistence.
//!
//! # Invariants
//! - `question` and `answer` are never blank once stored.
//! - `id` is assigned by the store and never reused for another question.

use super::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a question row.
pub type QuestionId = i64;

/// Persisted trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    /// Soft reference to `Category::id`; not enforced on insert.
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Insert payload for a question that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// Validation failures for question writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionValidationError {
    BlankQuestion,
    BlankAnswer,
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankQuestion => write!(f, "question text must not be blank"),
            Self::BlankAnswer => write!(f, "answer text must not be blank"),
        }
    }
}

impl Error for QuestionValidationError {}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Checks write invariants.
    ///
    /// # Errors
    /// - `BlankQuestion` when `question` is empty or whitespace only.
    /// - `BlankAnswer` when `answer` is empty or whitespace only.
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        validate_text(&self.question, &self.answer)
    }

    /// Binds the payload to a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl Question {
    /// Re-checks text invariants on a persisted record.
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        validate_text(&self.question, &self.answer)
    }
}

fn validate_text(question: &str, answer: &str) -> Result<(), QuestionValidationError> {
    if question.trim().is_empty() {
        return Err(QuestionValidationError::BlankQuestion);
    }
    if answer.trim().is_empty() {
        return Err(QuestionValidationError::BlankAnswer);
    }
    Ok(())
}
