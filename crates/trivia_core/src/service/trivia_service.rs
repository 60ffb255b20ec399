//! Trivia use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the HTTP layer.
//! - Resolve category references before delegating to pagination, search and
//!   quiz selection.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.
//! - Empty pages and empty search results are returned as-is; callers decide
//!   whether emptiness is an error.

use crate::model::category::{Category, CategoryId, QuizScope};
use crate::model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
use crate::repo::{RepoError, TriviaRepository};
use crate::search::substring::{search_questions, SearchOutcome, SearchQuery};
use crate::service::pagination::{paginate_questions, QuestionPage};
use crate::service::quiz::{select_quiz_question, QuizRequest, QuizRound};
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for trivia use-cases.
#[derive(Debug)]
pub enum TriviaServiceError {
    /// Question input violates write invariants.
    Validation(QuestionValidationError),
    /// Target question does not exist.
    QuestionNotFound(QuestionId),
    /// Target category does not exist.
    CategoryNotFound(CategoryId),
    /// Quiz scope names a category that does not exist.
    UnknownQuizCategory(CategoryId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TriviaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::QuestionNotFound(id) => write!(f, "question not found: {id}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::UnknownQuizCategory(id) => write!(f, "quiz category does not exist: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TriviaServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TriviaServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::QuestionNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, TriviaServiceError>;

/// Questions of one category with the category itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: Category,
}

/// Trivia service facade over repository implementations.
pub struct TriviaService<R: TriviaRepository> {
    repo: R,
}

impl<R: TriviaRepository> TriviaService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_categories(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.repo.list_categories()?)
    }

    /// Returns one page of questions; the page may be empty.
    pub fn questions_page(&self, page: u64) -> ServiceResult<QuestionPage> {
        Ok(paginate_questions(&self.repo, page)?)
    }

    /// Lists every question of an existing category.
    ///
    /// # Errors
    /// - `CategoryNotFound` when the category id is unknown.
    pub fn questions_in_category(&self, id: CategoryId) -> ServiceResult<CategoryQuestions> {
        let current_category = self
            .repo
            .get_category(id)?
            .ok_or(TriviaServiceError::CategoryNotFound(id))?;
        let questions = self.repo.list_questions_by_category(id)?;

        Ok(CategoryQuestions {
            total_questions: questions.len() as u64,
            questions,
            current_category,
        })
    }

    /// Searches question text; the outcome may be empty.
    pub fn search(&self, query: &SearchQuery) -> ServiceResult<SearchOutcome> {
        Ok(search_questions(&self.repo, query)?)
    }

    /// Validates and stores a new question.
    pub fn create_question(&self, question: &NewQuestion) -> ServiceResult<Question> {
        match self.repo.insert_question(question) {
            Ok(created) => {
                info!(
                    "event=question_create module=service status=ok question_id={}",
                    created.id
                );
                Ok(created)
            }
            Err(err) => {
                warn!("event=question_create module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Deletes a question by id.
    ///
    /// # Errors
    /// - `QuestionNotFound` when the id is unknown.
    pub fn delete_question(&self, id: QuestionId) -> ServiceResult<()> {
        self.repo.delete_question(id)?;
        info!("event=question_delete module=service status=ok question_id={id}");
        Ok(())
    }

    /// Serves the next quiz question.
    ///
    /// # Errors
    /// - `UnknownQuizCategory` when a category scope names no stored category.
    pub fn next_quiz_question<G: Rng + ?Sized>(
        &self,
        request: &QuizRequest,
        rng: &mut G,
    ) -> ServiceResult<QuizRound> {
        if let QuizScope::Category(id) = request.scope {
            if self.repo.get_category(id)?.is_none() {
                return Err(TriviaServiceError::UnknownQuizCategory(id));
            }
        }
        Ok(select_quiz_question(&self.repo, request, rng)?)
    }
}
