//! Substring search over question text.
//!
//! # Responsibility
//! - Match search terms against `Question::question` case-insensitively.
//! - Return the full match set with its count; no pagination.
//!
//! # Invariants
//! - Results are ordered by question id ascending.
//! - Cross-category search never reports a current category.
//! - An empty match set is a normal outcome; callers decide if it is an error.

use crate::model::category::Category;
use crate::model::question::Question;
use crate::repo::{RepoResult, TriviaRepository};
use log::debug;

/// Search options for question text queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text; surrounding whitespace is ignored.
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether the query can match anything at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Search result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    /// Always `None`: matches may span categories.
    pub current_category: Option<Category>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Runs a substring search through the store.
///
/// Returns an empty outcome for blank queries without touching the store.
pub fn search_questions<R: TriviaRepository + ?Sized>(
    repo: &R,
    query: &SearchQuery,
) -> RepoResult<SearchOutcome> {
    let questions = if query.is_blank() {
        Vec::new()
    } else {
        repo.search_questions(query.text.trim())?
    };

    debug!(
        "event=search module=search status=ok term_chars={} hits={}",
        query.text.chars().count(),
        questions.len()
    );

    Ok(SearchOutcome {
        total_questions: questions.len() as u64,
        questions,
        current_category: None,
    })
}

/// Case-insensitive substring predicate used by non-SQL stores.
///
/// An empty `term` matches every haystack.
pub fn matches_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}
