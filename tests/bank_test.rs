use edusolve::models::Bank;

#[test]
fn test_builtin_bank_loads() {
    let bank = Bank::builtin().unwrap();
    assert_eq!(bank.subjects().len(), 3);
    for name in ["Math", "Science", "English"] {
        let subject = bank.subject(name).unwrap();
        assert!(!subject.quiz.is_empty(), "{name} should have quiz items");
    }
}

#[test]
fn test_rejects_answer_not_in_options() {
    let raw = r#"[{"name": "Math", "quiz": [{"prompt": "Q", "options": ["a", "b"], "answer": "c"}]}]"#;
    assert!(Bank::from_json(raw).is_err());
}

#[test]
fn test_rejects_single_option_question() {
    let raw = r#"[{"name": "Math", "quiz": [{"prompt": "Q", "options": ["a"], "answer": "a"}]}]"#;
    assert!(Bank::from_json(raw).is_err());
}

#[test]
fn test_rejects_duplicate_subject_names() {
    let raw = r#"[{"name": "Math", "quiz": []}, {"name": "Math", "quiz": []}]"#;
    assert!(Bank::from_json(raw).is_err());
}

#[test]
fn test_subject_without_quiz_is_allowed_at_load_time() {
    // Ask-only subjects are legal in the catalogue; starting a quiz for
    // them fails at the engine level instead.
    let raw = r#"[{"name": "Art", "examples": ["Describe cubism"]}]"#;
    let bank = Bank::from_json(raw).unwrap();
    assert!(bank.subject("Art").unwrap().quiz.is_empty());
}
