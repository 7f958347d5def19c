pub mod extractors;
pub mod handlers;
pub mod history;
pub mod llm;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod sessions;
pub mod solver;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use axum_extra::extract::CookieJar;

use crate::extractors::SessionToken;

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<models::Bank>,
    pub sessions: sessions::SessionRegistry,
    pub edubot: llm::EduBot,
    pub solver: solver::SolverClient,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::ask::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::history::routes())
        .merge(handlers::solver::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_cookie,
        ))
        .nest("/static", statics::routes())
        .with_state(state)
}

/// Assigns every browser a session token so quiz state, chat log and
/// history can be keyed per user without accounts.
async fn session_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let (token, is_new) = match jar.get(names::UI_SESSION_COOKIE_NAME) {
        Some(cookie) => (cookie.value().to_string(), false),
        None => (sessions::new_token(), true),
    };

    req.extensions_mut().insert(SessionToken(token.clone()));
    let mut response = next.run(req).await;

    if is_new {
        match utils::cookie(names::UI_SESSION_COOKIE_NAME, &token, state.secure_cookies) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(e) => tracing::error!("could not build session cookie: {e}"),
        }
    }

    response
}
