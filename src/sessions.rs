use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ulid::Ulid;

use crate::history::HistoryStore;
use crate::quiz::QuizSession;

/// One Ask-page exchange.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub subject: String,
    pub question: String,
    pub answer: String,
}

/// Everything EduSolve remembers about one browser session: the chat log,
/// the active quiz pass (at most one), and the attempt ledger. Lives only
/// as long as the process.
#[derive(Debug, Default)]
pub struct UserState {
    pub chat: Vec<ChatExchange>,
    pub quiz: Option<QuizSession>,
    pub history: HistoryStore,
}

/// Token-keyed registry of per-browser state. The quiz engine itself is
/// stateless; handlers lock an entry, thread state values through the
/// engine, and store the result back.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<String, UserState>>>,
}

impl SessionRegistry {
    pub fn with<R>(&self, token: &str, f: impl FnOnce(&mut UserState) -> R) -> R {
        let mut sessions = self.inner.lock().expect("session registry lock poisoned");
        f(sessions.entry(token.to_string()).or_default())
    }
}

pub fn new_token() -> String {
    Ulid::new().to_string()
}
