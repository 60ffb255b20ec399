//! Fixed-size question pagination.
//!
//! # Invariants
//! - A page holds at most `PAGE_SIZE` questions.
//! - Pages are 1-based with no upper bound; page `0` and pages past the end
//!   are empty, never errors.
//! - Browsing all questions never reports a current category.

use crate::model::category::Category;
use crate::model::question::Question;
use crate::repo::{QuestionListQuery, RepoResult, TriviaRepository};

/// Number of questions per page.
pub const PAGE_SIZE: u32 = 10;

/// Default page when the caller does not specify one.
pub const DEFAULT_PAGE: u64 = 1;

/// One page of questions plus listing metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Total stored questions, independent of the page.
    pub total_questions: u64,
    pub categories: Vec<Category>,
    /// Always `None` when browsing every category.
    pub current_category: Option<Category>,
}

impl QuestionPage {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Offset of the first item on `page`, or `None` for page `0` and for pages
/// whose offset does not fit in `u64`.
pub fn page_offset(page: u64) -> Option<u64> {
    page.checked_sub(1)?.checked_mul(u64::from(PAGE_SIZE))
}

/// Slices an already-ordered sequence to one page.
pub fn paginate<T>(items: &[T], page: u64) -> &[T] {
    let Some(offset) = page_offset(page) else {
        return &[];
    };
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(items.len());
    let end = start.saturating_add(PAGE_SIZE as usize).min(items.len());
    &items[start..end]
}

/// Loads one page of id-ordered questions together with the category list.
pub fn paginate_questions<R: TriviaRepository + ?Sized>(
    repo: &R,
    page: u64,
) -> RepoResult<QuestionPage> {
    let questions = match page_offset(page) {
        Some(offset) => repo.list_questions(&QuestionListQuery::window(offset, PAGE_SIZE))?,
        None => Vec::new(),
    };

    Ok(QuestionPage {
        questions,
        total_questions: repo.count_questions(None)?,
        categories: repo.list_categories()?,
        current_category: None,
    })
}
