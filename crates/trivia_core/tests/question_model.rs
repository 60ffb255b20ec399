use trivia_core::{Category, NewQuestion, QuestionValidationError};

#[test]
fn validate_accepts_complete_question() {
    let question = NewQuestion::new("What is the heaviest organ?", "The liver", 1, 4);
    assert_eq!(question.validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_question_regardless_of_other_fields() {
    for blank in ["", " ", "\t\n"] {
        let question = NewQuestion::new(blank, "answer", 1, 1);
        assert_eq!(
            question.validate(),
            Err(QuestionValidationError::BlankQuestion)
        );
    }
}

#[test]
fn validate_rejects_blank_answer() {
    let question = NewQuestion::new("question", "   ", 2, 3);
    assert_eq!(question.validate(), Err(QuestionValidationError::BlankAnswer));
}

#[test]
fn question_serialization_uses_expected_wire_fields() {
    let question = NewQuestion::new("Who invented Peanut Butter?", "George Washington Carver", 4, 2)
        .into_question(12);

    let json = serde_json::to_value(&question).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["question"], "Who invented Peanut Butter?");
    assert_eq!(json["answer"], "George Washington Carver");
    assert_eq!(json["category"], 4);
    assert_eq!(json["difficulty"], 2);
}

#[test]
fn category_serializes_kind_as_type() {
    let json = serde_json::to_value(Category::new(6, "Sports")).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 6, "type": "Sports" }));
}
