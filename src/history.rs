use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One completed, scored quiz pass. Created exactly once per submission
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    pub subject: String,
    pub score: u32,
    pub total: u32,
    pub timestamp: DateTime<Utc>,
}

/// Append-only ledger of attempts, grouped by subject in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    subjects: Vec<(String, Vec<QuizAttempt>)>,
}

const NO_ATTEMPTS: &[QuizAttempt] = &[];

impl HistoryStore {
    pub fn record(&mut self, attempt: QuizAttempt) {
        match self
            .subjects
            .iter_mut()
            .find(|entry| entry.0 == attempt.subject)
        {
            Some(entry) => entry.1.push(attempt),
            None => self.subjects.push((attempt.subject.clone(), vec![attempt])),
        }
    }

    /// Attempts for one subject in insertion order; empty for an unknown
    /// subject, never an error.
    pub fn query(&self, subject: &str) -> &[QuizAttempt] {
        self.subjects
            .iter()
            .find(|entry| entry.0 == subject)
            .map(|entry| entry.1.as_slice())
            .unwrap_or(NO_ATTEMPTS)
    }

    /// The full mapping in first-seen subject order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[QuizAttempt])> {
        self.subjects
            .iter()
            .map(|(name, attempts)| (name.as_str(), attempts.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Deterministic JSON document: subject names in first-seen order,
    /// attempts in insertion order, RFC 3339 timestamps.
    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Wire shape of one attempt inside the export document; the subject name
/// lives on the enclosing map key.
#[derive(Serialize, Deserialize)]
struct AttemptRecord {
    score: u32,
    total: u32,
    timestamp: DateTime<Utc>,
}

impl Serialize for HistoryStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.subjects.len()))?;
        for (name, attempts) in &self.subjects {
            let records: Vec<AttemptRecord> = attempts
                .iter()
                .map(|attempt| AttemptRecord {
                    score: attempt.score,
                    total: attempt.total,
                    timestamp: attempt.timestamp,
                })
                .collect();
            map.serialize_entry(name, &records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HistoryStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = HistoryStore;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of subject name to attempt list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut subjects = Vec::new();
                while let Some((name, records)) =
                    access.next_entry::<String, Vec<AttemptRecord>>()?
                {
                    let attempts = records
                        .into_iter()
                        .map(|record| QuizAttempt {
                            subject: name.clone(),
                            score: record.score,
                            total: record.total,
                            timestamp: record.timestamp,
                        })
                        .collect();
                    subjects.push((name, attempts));
                }
                Ok(HistoryStore { subjects })
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
