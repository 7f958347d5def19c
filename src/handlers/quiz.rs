use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::Router;

use crate::extractors::SessionToken;
use crate::quiz::QuizSession;
use crate::rejections::AppError;
use crate::sessions::UserState;
use crate::views::quiz as quiz_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_INDEX_URL, get(subject_index))
        .route("/quiz/{subject}", get(quiz_page))
        .route("/quiz/{subject}/submit", post(submit_quiz))
        .route("/quiz/{subject}/retry", post(retry_quiz))
        .route("/quiz/{subject}/results", get(quiz_results))
}

async fn subject_index(State(state): State<AppState>) -> maud::Markup {
    views::page(
        "Quiz Mode",
        quiz_views::subject_index(state.bank.subjects()),
    )
}

async fn quiz_page(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(subject): Path<String>,
) -> Result<maud::Markup, AppError> {
    let subject = state.bank.subject(&subject)?;

    // (Re)opening the quiz always deals a fresh shuffle.
    let session = QuizSession::start(subject, &mut rand::thread_rng())?;
    tracing::info!("started quiz for '{}'", session.subject());

    let page = views::page("Quiz", quiz_views::questions(&session));
    state.sessions.with(&token, |user| user.quiz = Some(session));

    Ok(page)
}

async fn retry_quiz(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(subject): Path<String>,
) -> Result<maud::Markup, AppError> {
    let subject = state.bank.subject(&subject)?;

    let session = QuizSession::reset(subject, &mut rand::thread_rng())?;
    tracing::info!("reset quiz for '{}'", session.subject());

    let page = views::page("Quiz", quiz_views::questions(&session));
    state.sessions.with(&token, |user| user.quiz = Some(session));

    Ok(page)
}

async fn submit_quiz(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(subject): Path<String>,
    Form(selections): Form<Vec<(String, String)>>,
) -> Result<axum::response::Response, AppError> {
    state.sessions.with(&token, |user| {
        let session = active_session(user, &subject)?;

        for (key, option) in &selections {
            // Radio groups are named q0, q1, ...; anything else is ignored.
            let Some(index) = key
                .strip_prefix('q')
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                continue;
            };
            session.record_selection(index, option)?;
        }

        let attempt = session.submit()?;
        tracing::info!(
            "quiz submitted for '{}': {} / {}",
            attempt.subject,
            attempt.score,
            attempt.total
        );
        user.history.record(attempt);

        Ok::<(), AppError>(())
    })?;

    Ok(Redirect::to(&names::quiz_results_url(&subject)).into_response())
}

async fn quiz_results(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(subject): Path<String>,
) -> Result<maud::Markup, AppError> {
    state.sessions.with(&token, |user| {
        let session = active_session(user, &subject)?;
        let detail = session.grade_detail()?;

        let score = detail.iter().filter(|line| line.is_correct).count() as u32;
        let total = detail.len() as u32;

        Ok(views::page(
            "Quiz Results",
            quiz_views::results(quiz_views::ResultsData {
                subject: session.subject(),
                score,
                total,
                detail,
            }),
        ))
    })
}

fn active_session<'a>(
    user: &'a mut UserState,
    subject: &str,
) -> Result<&'a mut QuizSession, AppError> {
    match &mut user.quiz {
        Some(session) if session.subject() == subject => Ok(session),
        _ => Err(AppError::Input("no quiz in progress for this subject")),
    }
}
