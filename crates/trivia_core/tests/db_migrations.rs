use rusqlite::Connection;
use trivia_core::db::migrations::latest_version;
use trivia_core::db::{open_db, open_db_in_memory, DbError};
use trivia_core::{RepoError, SqliteTriviaRepository, TriviaRepository};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "categories");
    assert_table_exists(&conn, "questions");
}

#[test]
fn migrations_seed_default_categories() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();

    let labels = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            (1, "Science".to_string()),
            (2, "Art".to_string()),
            (3, "Geography".to_string()),
            (4, "History".to_string()),
            (5, "Entertainment".to_string()),
            (6, "Sports".to_string()),
        ]
    );
}

#[test]
fn opening_same_database_twice_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ('Q', 'A', 1, 1);",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let repo = SqliteTriviaRepository::try_new(&conn_second).unwrap();
    assert_eq!(repo.count_questions(None).unwrap(), 1);
    assert_eq!(repo.list_categories().unwrap().len(), 6);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteTriviaRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::Db(DbError::UnsupportedSchemaVersion { db_version: 0, .. })
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
