//! Core domain logic for the trivia API.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, QuizScope, ALL_CATEGORIES_ID};
pub use model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
pub use repo::memory_repo::InMemoryTriviaRepository;
pub use repo::sqlite_repo::SqliteTriviaRepository;
pub use repo::{QuestionListQuery, RepoError, RepoResult, TriviaRepository};
pub use search::substring::{search_questions, SearchOutcome, SearchQuery};
pub use service::pagination::{paginate, paginate_questions, QuestionPage, PAGE_SIZE};
pub use service::quiz::{select_quiz_question, QuizRequest, QuizRound};
pub use service::trivia_service::{
    CategoryQuestions, ServiceResult, TriviaService, TriviaServiceError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
