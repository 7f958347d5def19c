use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::extractors::SessionToken;
use crate::rejections::AppError;
use crate::sessions::ChatExchange;
use crate::views::ask as ask_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ask_page))
        .route(names::ASK_URL, post(ask_post))
}

async fn ask_page(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> maud::Markup {
    let chat = state.sessions.with(&token, |user| user.chat.clone());
    let selected = chat.last().map(|exchange| exchange.subject.clone());

    views::page(
        "Ask EduBot",
        ask_views::page(state.bank.subjects(), selected.as_deref(), &chat),
    )
}

#[derive(Deserialize)]
struct AskBody {
    subject: String,
    question: String,
}

async fn ask_post(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Form(body): Form<AskBody>,
) -> Result<axum::response::Response, AppError> {
    let subject = state.bank.subject(&body.subject)?.name.clone();

    let question = body.question.trim().to_string();
    if question.is_empty() {
        // An empty question is silently ignored, like the original UI.
        return Ok(Redirect::to("/").into_response());
    }

    tracing::info!("forwarding {subject} question to the inference endpoint");
    let answer = state.edubot.ask(&subject, &question).await;

    state.sessions.with(&token, |user| {
        user.chat.push(ChatExchange {
            subject,
            question,
            answer,
        });
    });

    Ok(Redirect::to("/").into_response())
}
