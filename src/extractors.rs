use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::rejections::AppError;

/// Browser-session token assigned by the session-cookie middleware.
#[derive(Clone, Debug)]
pub struct SessionToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or(AppError::Internal("session middleware not installed"))
    }
}
