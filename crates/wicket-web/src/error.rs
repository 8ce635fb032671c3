//! Page error types

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Store error: {0}")]
    Store(#[from] wicket_store::StoreError),

    #[error("Auth error: {0}")]
    Auth(#[from] wicket_auth::AuthError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PageError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password.")
            }
            PageError::Store(wicket_store::StoreError::DuplicateUser(_)) => {
                (StatusCode::CONFLICT, "Username already exists. Try login.")
            }
            PageError::Store(_) | PageError::Auth(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again.",
            ),
        };

        // Every failure renders as a human-readable page with a back link.
        (status, Html(pages::error_page(message))).into_response()
    }
}
