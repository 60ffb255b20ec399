use trivia_core::db::open_db_in_memory;
use trivia_core::{
    search_questions, InMemoryTriviaRepository, NewQuestion, SearchQuery, SqliteTriviaRepository,
    TriviaRepository,
};

const SAMPLE: &[(&str, i64)] = &[
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", 5),
    ("Which Dutch graphic artist–initials M C was a creator of optical illusions?", 2),
    ("What is the largest lake in Africa?", 3),
    ("How many paintings did Van Gogh sell in his lifetime?", 2),
    ("Who discovered penicillin? 100% sure?", 1),
    ("Which École trained Monet?", 2),
];

fn seed(repo: &impl TriviaRepository) {
    for (text, category) in SAMPLE {
        repo.insert_question(&NewQuestion::new(*text, "answer", *category, 3))
            .unwrap();
    }
}

#[test]
fn sqlite_search_is_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    seed(&repo);

    let lower = search_questions(&repo, &SearchQuery::new("what")).unwrap();
    let upper = search_questions(&repo, &SearchQuery::new("WHAT")).unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.total_questions, 2);
    assert!(lower.current_category.is_none());
}

#[test]
fn sqlite_search_folds_non_ascii_case() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    seed(&repo);

    let upper = search_questions(&repo, &SearchQuery::new("École")).unwrap();
    let lower = search_questions(&repo, &SearchQuery::new("école")).unwrap();
    let shouted = search_questions(&repo, &SearchQuery::new("ÉCOLE")).unwrap();
    assert_eq!(upper.total_questions, 1);
    assert_eq!(upper, lower);
    assert_eq!(upper, shouted);
}

#[test]
fn sqlite_search_treats_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    seed(&repo);

    let percent = search_questions(&repo, &SearchQuery::new("100%")).unwrap();
    assert_eq!(percent.total_questions, 1);

    let underscore = search_questions(&repo, &SearchQuery::new("_")).unwrap();
    assert!(underscore.is_empty());
}

#[test]
fn sqlite_search_without_match_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTriviaRepository::try_new(&conn).unwrap();
    seed(&repo);

    assert!(search_questions(&repo, &SearchQuery::new("halala"))
        .unwrap()
        .is_empty());
    assert!(search_questions(&repo, &SearchQuery::new("  "))
        .unwrap()
        .is_empty());
}

#[test]
fn sqlite_and_memory_stores_agree_on_matches() {
    let conn = open_db_in_memory().unwrap();
    let sqlite = SqliteTriviaRepository::try_new(&conn).unwrap();
    let memory = InMemoryTriviaRepository::with_default_categories();
    seed(&sqlite);
    seed(&memory);

    for term in ["an", "VAN GOGH", " lake ", "in", "zzz", "École", "école", "ÉCOLE"] {
        let query = SearchQuery::new(term);
        assert_eq!(
            search_questions(&sqlite, &query).unwrap(),
            search_questions(&memory, &query).unwrap(),
            "stores disagree for term {term:?}"
        );
    }
}
