//! The session-gated dashboard

use axum::{
    Router,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{Html, Redirect},
    routing::get,
};
use tracing::debug;
use wicket_auth::token_from_headers;

use crate::pages;
use crate::state::AppState;

/// Extractor for the logged-in username.
///
/// An anonymous visitor is not an error: the rejection is the redirect back
/// to the login form.
pub struct SessionUser(pub String);

impl<S> FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let Some(token) = token_from_headers(&parts.headers) else {
            return Err(Redirect::to("/login"));
        };

        let claims = app_state
            .sessions
            .validate(&token)
            .map_err(|_| Redirect::to("/login"))?;

        debug!("Authenticated session for user: {}", claims.sub);
        Ok(SessionUser(claims.sub))
    }
}

/// GET /dashboard
async fn dashboard(SessionUser(username): SessionUser) -> Html<String> {
    pages::dashboard_page(&username)
}

/// Create dashboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
