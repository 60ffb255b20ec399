//! Store abstraction and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract used by pagination, search and quiz logic.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Question writes must pass `NewQuestion::validate()` before persistence.
//! - Question reads are ordered by id ascending.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod memory_repo;
pub mod sqlite_repo;

use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for trivia persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuestionValidationError),
    Db(DbError),
    NotFound(QuestionId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted trivia data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<QuestionValidationError> for RepoError {
    fn from(value: QuestionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionListQuery {
    /// Restricts results to one category when set.
    pub category: Option<CategoryId>,
    /// Maximum rows to return; `None` returns every remaining row.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u64,
}

impl QuestionListQuery {
    /// Every question in one category.
    pub fn in_category(category: CategoryId) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// One window of the id-ordered question list.
    pub fn window(offset: u64, limit: u32) -> Self {
        Self {
            category: None,
            limit: Some(limit),
            offset,
        }
    }
}

/// Store contract for categories and questions.
pub trait TriviaRepository {
    /// Lists categories ordered by id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists questions ordered by id ascending.
    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>>;
    /// Counts questions, optionally within one category.
    fn count_questions(&self, category: Option<CategoryId>) -> RepoResult<u64>;
    /// Case-insensitive substring match over question text, ordered by id.
    ///
    /// Blank terms match nothing.
    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>>;
    /// Validates and persists a question, returning it with its assigned id.
    fn insert_question(&self, question: &NewQuestion) -> RepoResult<Question>;
    /// Hard-deletes a question.
    ///
    /// # Errors
    /// - `NotFound` when no question has this id.
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;

    fn list_questions_by_category(&self, category: CategoryId) -> RepoResult<Vec<Question>> {
        self.list_questions(&QuestionListQuery::in_category(category))
    }
}

impl<R: TriviaRepository + ?Sized> TriviaRepository for &R {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        (**self).list_categories()
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        (**self).get_category(id)
    }

    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        (**self).list_questions(query)
    }

    fn count_questions(&self, category: Option<CategoryId>) -> RepoResult<u64> {
        (**self).count_questions(category)
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        (**self).search_questions(term)
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<Question> {
        (**self).insert_question(question)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        (**self).delete_question(id)
    }
}
