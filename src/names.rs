pub const ASK_URL: &str = "/ask";
pub const QUIZ_INDEX_URL: &str = "/quiz";
pub const HISTORY_URL: &str = "/history";
pub const HISTORY_EXPORT_URL: &str = "/history/export";
pub const SOLVER_URL: &str = "/solver";

pub const UI_SESSION_COOKIE_NAME: &str = "edusolve_session";
pub const HISTORY_EXPORT_FILENAME: &str = "quiz_history.json";

pub fn quiz_page_url(subject: &str) -> String {
    format!("/quiz/{}", urlencoding::encode(subject))
}

pub fn submit_quiz_url(subject: &str) -> String {
    format!("/quiz/{}/submit", urlencoding::encode(subject))
}

pub fn retry_quiz_url(subject: &str) -> String {
    format!("/quiz/{}/retry", urlencoding::encode(subject))
}

pub fn quiz_results_url(subject: &str) -> String {
    format!("/quiz/{}/results", urlencoding::encode(subject))
}

// Generation defaults for the inference endpoint
pub const LLM_TEMPERATURE: f64 = 0.7;
pub const LLM_MAX_NEW_TOKENS: u32 = 512;
