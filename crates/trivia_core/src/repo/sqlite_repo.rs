//! SQLite implementation of the trivia store.
//!
//! # Responsibility
//! - Provide category reads and question list/search/insert/delete over the
//!   `categories` and `questions` tables.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewQuestion::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Search treats `%`, `_` and `\` in the term literally.
//! - Search folds case with `lower_unicode`, so non-ASCII letters match too.

use super::{QuestionListQuery, RepoError, RepoResult, TriviaRepository};
use crate::db::functions::LOWER_UNICODE;
use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{NewQuestion, Question, QuestionId};
use log::{debug, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category,
    difficulty
FROM questions";

/// SQLite-backed trivia store borrowing one connection.
pub struct SqliteTriviaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTriviaRepository<'conn> {
    /// Wraps a connection that already went through `open_db`.
    ///
    /// # Errors
    /// - `Db(UnsupportedSchemaVersion)` when the schema is not at the latest
    ///   migration this build knows.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let version = current_version(conn)?;
        let latest = latest_version();
        if version != latest {
            return Err(RepoError::Db(DbError::UnsupportedSchemaVersion {
                db_version: version,
                latest_supported: latest,
            }));
        }
        Ok(Self { conn })
    }
}

impl TriviaRepository for SqliteTriviaRepository<'_> {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1;",
                [id],
                |row| Ok((row.get::<_, CategoryId>("id")?, row.get::<_, String>("type")?)),
            )
            .optional()?;

        row.map(|(id, kind)| validate_category(Category::new(id, kind)))
            .transpose()
    }

    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Integer(category));
        }

        sql.push_str(" ORDER BY id ASC");

        // No table holds more than i64::MAX rows.
        let Ok(offset) = i64::try_from(query.offset) else {
            return Ok(Vec::new());
        };
        match query.limit {
            Some(limit) => {
                sql.push_str(" LIMIT ? OFFSET ?");
                bind_values.push(Value::Integer(i64::from(limit)));
                bind_values.push(Value::Integer(offset));
            }
            None if offset > 0 => {
                sql.push_str(" LIMIT -1 OFFSET ?");
                bind_values.push(Value::Integer(offset));
            }
            None => {}
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        collect_questions(&mut rows)
    }

    fn count_questions(&self, category: Option<CategoryId>) -> RepoResult<u64> {
        let count: i64 = match category {
            Some(category) => self.conn.query_row(
                "SELECT COUNT(*) FROM questions WHERE category = ?1;",
                [category],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM questions;", [], |row| row.get(0))?,
        };
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative question count {count}")))
    }

    fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        let mut stmt = self.conn.prepare(&format!(
            "{QUESTION_SELECT_SQL}
             WHERE {LOWER_UNICODE}(question) LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([pattern])?;
        let questions = collect_questions(&mut rows)?;
        debug!(
            "event=question_search module=repo status=ok hits={}",
            questions.len()
        );
        Ok(questions)
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<Question> {
        question.validate()?;

        self.conn.execute(
            "INSERT INTO questions (
                question,
                answer,
                category,
                difficulty
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                question.question.as_str(),
                question.answer.as_str(),
                question.category,
                question.difficulty,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!(
            "event=question_insert module=repo status=ok question_id={id} category={}",
            question.category
        );
        Ok(question.clone().into_question(id))
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        info!("event=question_delete module=repo status=ok question_id={id}");
        Ok(())
    }
}

fn collect_questions(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Question>> {
    let mut questions = Vec::new();
    while let Some(row) = rows.next()? {
        questions.push(parse_question_row(row)?);
    }
    Ok(questions)
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    let question = Question {
        id: row.get("id")?,
        question: row.get("question")?,
        answer: row.get("answer")?,
        category: row.get("category")?,
        difficulty: row.get("difficulty")?,
    };
    question.validate().map_err(|err| {
        RepoError::InvalidData(format!("question {} in questions table: {err}", question.id))
    })?;
    Ok(question)
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    validate_category(Category::new(row.get("id")?, row.get::<_, String>("type")?))
}

fn validate_category(category: Category) -> RepoResult<Category> {
    if category.kind.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank type for category {} in categories.type",
            category.id
        )));
    }
    Ok(category)
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
