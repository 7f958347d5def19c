use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session cookie; no Max-Age, so it lives exactly as long as the browser
/// session that owns the in-memory state.
pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly; Path=/; SameSite=Strict{secure_attr}").parse()
}
