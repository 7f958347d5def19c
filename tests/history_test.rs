use chrono::{TimeZone, Utc};
use edusolve::history::{HistoryStore, QuizAttempt};

fn attempt(subject: &str, score: u32, total: u32, secs: i64) -> QuizAttempt {
    QuizAttempt {
        subject: subject.to_string(),
        score,
        total,
        timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

#[test]
fn test_record_groups_by_subject_in_first_seen_order() {
    let mut store = HistoryStore::default();
    store.record(attempt("Science", 1, 2, 100));
    store.record(attempt("Math", 2, 2, 200));
    store.record(attempt("Science", 0, 2, 300));

    let order: Vec<&str> = store.iter().map(|(subject, _)| subject).collect();
    assert_eq!(order, vec!["Science", "Math"]);

    let science = store.query("Science");
    assert_eq!(science.len(), 2);
    assert_eq!(science[0].score, 1);
    assert_eq!(science[1].score, 0);

    assert_eq!(store.query("Math").len(), 1);
}

#[test]
fn test_query_unknown_subject_is_empty() {
    let store = HistoryStore::default();
    assert!(store.query("Math").is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_record_never_deduplicates() {
    let mut store = HistoryStore::default();
    store.record(attempt("Math", 2, 2, 100));
    store.record(attempt("Math", 2, 2, 100));

    assert_eq!(store.query("Math").len(), 2);
}

#[test]
fn test_export_round_trips() {
    let mut store = HistoryStore::default();
    store.record(attempt("Science", 1, 2, 100));
    store.record(attempt("Math", 2, 2, 200));
    store.record(attempt("Science", 2, 2, 300));

    let document = store.export().unwrap();
    let restored = HistoryStore::from_json(&document).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn test_empty_store_round_trips() {
    let store = HistoryStore::default();
    let restored = HistoryStore::from_json(&store.export().unwrap()).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn test_export_format() {
    let mut store = HistoryStore::default();
    store.record(attempt("Math", 2, 3, 100));

    let value: serde_json::Value = serde_json::from_str(&store.export().unwrap()).unwrap();
    let attempts = value
        .get("Math")
        .and_then(|v| v.as_array())
        .expect("export should map subject name to an attempt list");

    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0]["score"], 2);
    assert_eq!(attempts[0]["total"], 3);
    assert!(
        attempts[0]["timestamp"].is_string(),
        "timestamp should be an ISO-8601 string"
    );
    assert!(
        attempts[0].get("subject").is_none(),
        "subject lives on the map key, not the attempt object"
    );
}
