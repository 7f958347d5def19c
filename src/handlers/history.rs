use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::extractors::SessionToken;
use crate::rejections::{AppError, ResultExt};
use crate::views::history as history_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HISTORY_URL, get(history_page))
        .route(names::HISTORY_EXPORT_URL, get(export_history))
}

async fn history_page(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> maud::Markup {
    state.sessions.with(&token, |user| {
        views::page("Quiz Score History", history_views::page(&user.history))
    })
}

async fn export_history(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .sessions
        .with(&token, |user| user.history.export())
        .reject("could not serialize quiz history")?;

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (
                CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    names::HISTORY_EXPORT_FILENAME
                ),
            ),
        ],
        document,
    ))
}
