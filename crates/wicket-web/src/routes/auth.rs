//! Signup, login, and logout routes

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use tracing::{debug, info};
use wicket_auth::{hash_password, verify_password};

use crate::error::PageError;
use crate::pages;
use crate::state::AppState;

use super::types::{LoginForm, SignupForm};

/// A valid PHC string that verifies no password. Login attempts for unknown
/// usernames are checked against it so the two failure paths take similar
/// time.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$bm8tc3VjaC11c2VyLXNhbHQ$TJrzW4ymF0mBevW1evvUzg";

/// GET / - the app has no landing page of its own
async fn home() -> Redirect {
    Redirect::to("/login")
}

/// GET /signup
async fn show_signup() -> Html<String> {
    pages::signup_page()
}

/// POST /signup
async fn handle_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Html<String>, PageError> {
    let password_hash = hash_password(&form.password)?;
    state.store.insert(&form.username, &password_hash)?;

    metrics::counter!("wicket_signups_total").increment(1);
    info!("User {} signed up", form.username.to_lowercase());

    Ok(pages::success_page(
        "Signup successful. You can now login.",
        "/login",
    ))
}

/// GET /login
async fn show_login() -> Html<String> {
    pages::login_page()
}

/// POST /login
async fn handle_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, PageError> {
    debug!("Login attempt for user: {}", form.username);

    let username = form.username.to_lowercase();
    let stored_hash = state.store.get(&username);

    // Verify against a dummy hash when the user is unknown so both failure
    // cases run the hash function.
    let hash = stored_hash.as_deref().unwrap_or(DUMMY_HASH);
    let password_valid = verify_password(&form.password, hash);

    if stored_hash.is_none() || !password_valid {
        metrics::counter!("wicket_login_failures_total").increment(1);
        return Err(PageError::InvalidCredentials);
    }

    let token = state.sessions.issue(&username)?;
    let cookie = state.sessions.session_cookie(&token)?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    metrics::counter!("wicket_logins_total").increment(1);
    info!("User {} logged in", username);

    Ok((headers, Redirect::to("/dashboard")))
}

/// GET /logout - clears the session cookie unconditionally
async fn logout(State(state): State<AppState>) -> (HeaderMap, Html<String>) {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, state.sessions.clear_cookie());

    (
        headers,
        pages::success_page("Logged out successfully.", "/login"),
    )
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/signup", get(show_signup).post(handle_signup))
        .route("/login", get(show_login).post(handle_login))
        .route("/logout", get(logout))
}
