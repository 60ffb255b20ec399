//! Random quiz question selection.
//!
//! # Responsibility
//! - Resolve the question pool for a quiz scope.
//! - Pick one unseen question uniformly at random.
//!
//! # Invariants
//! - Never returns a question whose id is in `previous_questions`.
//! - A category scope never returns a question from another category.
//! - An exhausted pool yields `question = None`, not an error.
//! - `total_questions` is the pool size before exclusion.

use crate::model::category::QuizScope;
use crate::model::question::{Question, QuestionId};
use crate::repo::{QuestionListQuery, RepoResult, TriviaRepository};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Input for one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub scope: QuizScope,
    pub previous_questions: HashSet<QuestionId>,
}

impl QuizRequest {
    pub fn new(scope: QuizScope, previous_questions: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            scope,
            previous_questions: previous_questions.into_iter().collect(),
        }
    }
}

/// Result of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    /// `None` once every question in scope has been served.
    pub question: Option<Question>,
    pub total_questions: u64,
}

impl QuizRound {
    pub fn is_exhausted(&self) -> bool {
        self.question.is_none()
    }
}

/// Picks the next quiz question from the store.
///
/// Category existence is not checked here; an unknown category simply has an
/// empty pool.
pub fn select_quiz_question<R, G>(
    repo: &R,
    request: &QuizRequest,
    rng: &mut G,
) -> RepoResult<QuizRound>
where
    R: TriviaRepository + ?Sized,
    G: Rng + ?Sized,
{
    let pool = repo.list_questions(&QuestionListQuery {
        category: request.scope.category_filter(),
        ..QuestionListQuery::default()
    })?;

    let question = pick_unseen(&pool, &request.previous_questions, rng).cloned();
    debug!(
        "event=quiz_select module=quiz status=ok pool={} previous={} exhausted={}",
        pool.len(),
        request.previous_questions.len(),
        question.is_none()
    );

    Ok(QuizRound {
        question,
        total_questions: pool.len() as u64,
    })
}

/// Uniformly picks one question from `pool` whose id is not in `previous`.
pub fn pick_unseen<'a, G: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &HashSet<QuestionId>,
    rng: &mut G,
) -> Option<&'a Question> {
    let unseen = pool
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect::<Vec<_>>();
    unseen.choose(rng).copied()
}
