//! In-memory trivia store.
//!
//! Mirrors `SqliteTriviaRepository` semantics without a database, so the
//! selection logic can be exercised in isolation. Not thread-safe.

use super::{QuestionListQuery, RepoError, RepoResult, TriviaRepository};
use crate::model::category::{Category, CategoryId, DEFAULT_CATEGORIES};
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::search::substring::matches_term;
use std::cell::{Cell, RefCell};

/// `RefCell`-backed store with monotonically assigned question ids.
#[derive(Debug)]
pub struct InMemoryTriviaRepository {
    categories: Vec<Category>,
    questions: RefCell<Vec<Question>>,
    next_id: Cell<QuestionId>,
}

impl InMemoryTriviaRepository {
    /// Creates an empty store with the given categories.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut categories = categories;
        categories.sort_by_key(|category| category.id);
        Self {
            categories,
            questions: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Creates an empty store seeded like a freshly migrated database.
    pub fn with_default_categories() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category::new(*id, *kind))
                .collect(),
        )
    }
}

impl TriviaRepository for InMemoryTriviaRepository {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(self
            .questions
            .borrow()
            .iter()
            .filter(|question| query.category.map_or(true, |c| question.category == c))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count_questions(&self, category: Option<CategoryId>) -> RepoResult<u64> {
        let count = self
            .questions
            .borrow()
            .iter()
            .filter(|question| category.map_or(true, |c| question.category == c))
            .count();
        Ok(count as u64)
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .questions
            .borrow()
            .iter()
            .filter(|question| matches_term(&question.question, term))
            .cloned()
            .collect())
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<Question> {
        question.validate()?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let stored = question.clone().into_question(id);
        // Ids only grow, so pushing keeps the vector id-ordered.
        self.questions.borrow_mut().push(stored.clone());
        Ok(stored)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let mut questions = self.questions.borrow_mut();
        let index = questions
            .iter()
            .position(|question| question.id == id)
            .ok_or(RepoError::NotFound(id))?;
        questions.remove(index);
        Ok(())
    }
}
