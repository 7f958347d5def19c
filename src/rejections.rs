use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::quiz::QuizError;
use crate::views;

/// Failures a handler can surface to the browser.
#[derive(Debug)]
pub enum AppError {
    Quiz(QuizError),
    Input(&'static str),
    Internal(&'static str),
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        AppError::Quiz(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Quiz(err) => {
                let code = match err {
                    QuizError::UnknownSubject(_) => StatusCode::NOT_FOUND,
                    QuizError::InvalidIndex { .. } | QuizError::InvalidOption { .. } => {
                        StatusCode::BAD_REQUEST
                    }
                    QuizError::AlreadySubmitted | QuizError::NotSubmitted => StatusCode::CONFLICT,
                };
                (code, err.to_string())
            }
            AppError::Input(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()),
        };

        (code, error_page(&message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { "Something went wrong" }
            p { (message) }
        },
    )
}

pub trait ResultExt<T> {
    /// Logs the underlying error and converts it into an internal failure.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|err| {
            tracing::error!("{message}: {err}");
            AppError::Internal(message)
        })
    }
}
