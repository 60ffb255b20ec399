use trivia_core::db::open_db_in_memory;
use trivia_core::{
    paginate_questions, NewQuestion, QuestionListQuery, RepoError, SqliteTriviaRepository,
    TriviaRepository, PAGE_SIZE,
};

fn insert(repo: &SqliteTriviaRepository<'_>, text: &str, category: i64) -> i64 {
    repo.insert_question(&NewQuestion::new(text, "answer", category, 1))
        .unwrap()
        .id
}

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();

    let first = insert(&repo, "first", 1);
    let second = insert(&repo, "second", 2);
    assert!(first > 0);
    assert!(second > first);

    let listed = repo.list_questions(&QuestionListQuery::default()).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].question, "first");
    assert_eq!(listed[1].category, 2);
}

#[test]
fn insert_rejects_blank_text_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();

    let err = repo
        .insert_question(&NewQuestion::new("", "", 1, 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count_questions(None).unwrap(), 0);
}

#[test]
fn insert_accepts_unknown_category_as_soft_reference() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();

    let id = insert(&repo, "orphan", 1000);
    let listed = repo.list_questions_by_category(1000).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
}

#[test]
fn delete_removes_row_and_second_delete_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    let id = insert(&repo, "doomed", 1);

    repo.delete_question(id).unwrap();
    assert_eq!(repo.count_questions(None).unwrap(), 0);

    let err = repo.delete_question(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}

#[test]
fn list_window_applies_offset_and_limit_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    let ids = (0..7)
        .map(|index| insert(&repo, &format!("q{index}"), 1))
        .collect::<Vec<_>>();

    let window = repo.list_questions(&QuestionListQuery::window(2, 3)).unwrap();
    let window_ids = window.iter().map(|q| q.id).collect::<Vec<_>>();
    assert_eq!(window_ids, ids[2..5].to_vec());

    let tail = repo
        .list_questions(&QuestionListQuery {
            offset: 5,
            ..QuestionListQuery::default()
        })
        .unwrap();
    assert_eq!(tail.len(), 2);
}

#[test]
fn category_filter_and_count_agree() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    for category in [1, 2, 2, 5, 2] {
        insert(&repo, "q", category);
    }

    let in_two = repo.list_questions_by_category(2).unwrap();
    assert_eq!(in_two.len(), 3);
    assert!(in_two.iter().all(|q| q.category == 2));
    assert_eq!(repo.count_questions(Some(2)).unwrap(), 3);
    assert_eq!(repo.count_questions(Some(3)).unwrap(), 0);
    assert_eq!(repo.count_questions(None).unwrap(), 5);
}

#[test]
fn get_category_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();

    assert_eq!(repo.get_category(2).unwrap().unwrap().kind, "Art");
    assert!(repo.get_category(1000).unwrap().is_none());
}

#[test]
fn sqlite_pages_hold_at_most_page_size() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    for index in 0..(PAGE_SIZE + 3) {
        insert(&repo, &format!("q{index}"), 1);
    }

    let first = paginate_questions(&repo, 1).unwrap();
    assert_eq!(first.questions.len(), PAGE_SIZE as usize);
    assert_eq!(first.total_questions, u64::from(PAGE_SIZE + 3));
    assert_eq!(paginate_questions(&repo, 2).unwrap().questions.len(), 3);
    assert!(paginate_questions(&repo, 3).unwrap().is_empty());
}

#[test]
fn offsets_beyond_sqlite_integer_range_are_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    insert(&repo, "only", 1);

    let far = repo
        .list_questions(&QuestionListQuery::window(u64::MAX, PAGE_SIZE))
        .unwrap();
    assert!(far.is_empty());
    assert!(paginate_questions(&repo, 1 << 60).unwrap().is_empty());
    assert!(paginate_questions(&repo, u64::MAX).unwrap().is_empty());
}
