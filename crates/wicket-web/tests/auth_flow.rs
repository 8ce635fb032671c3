//! End-to-end tests for the signup/login/dashboard/logout flow.
//!
//! These drive the real router with real `Set-Cookie`/`Cookie` headers; the
//! credential file lives in a per-test temp directory.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
    response::Response,
};
use tempfile::TempDir;
use tower::ServiceExt;
use wicket_auth::SessionManager;
use wicket_store::UserStore;
use wicket_web::{AppState, create_router};

fn test_app() -> (Router, Arc<UserStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(UserStore::new(dir.path().join("users.json")));
    let sessions = Arc::new(SessionManager::new("integration-test-secret", 24));
    let app = create_router(AppState::new(store.clone(), sessions), None);
    (app, store, dir)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pull the `name=value` pair out of a Set-Cookie header for reuse as a
/// request Cookie header.
fn cookie_pair(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("expected a Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn home_redirects_to_login() {
    let (app, _store, _dir) = test_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn forms_render() {
    let (app, _store, _dir) = test_app();

    let signup = get(&app, "/signup").await;
    assert_eq!(signup.status(), StatusCode::OK);
    assert!(body_string(signup).await.contains("<form"));

    let login = get(&app, "/login").await;
    assert_eq!(login.status(), StatusCode::OK);
    assert!(body_string(login).await.contains("<form"));
}

#[tokio::test]
async fn dashboard_requires_session() {
    let (app, _store, _dir) = test_app();

    let response = get(&app, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn signup_login_dashboard_logout_flow() {
    let (app, _store, _dir) = test_app();

    // Signup renders a success page.
    let response = post_form(&app, "/signup", "username=Alice&password=pw1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Signup successful"));

    // Login under a different casing of the same name sets the session
    // cookie and redirects to the dashboard.
    let response = post_form(&app, "/login", "username=alice&password=pw1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/dashboard");
    let cookie = cookie_pair(&response);
    assert!(cookie.starts_with("wicket_session="));

    // The dashboard greets the user by (title-cased) name.
    let response = get_with_cookie(&app, "/dashboard", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Welcome, Alice!"));

    // Logout clears the cookie.
    let response = get(&app, "/logout").await;
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(body_string(response).await.contains("Logged out successfully"));

    // Without the cookie the dashboard is gated again.
    let response = get(&app, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn duplicate_signup_rejected_case_insensitively() {
    let (app, store, _dir) = test_app();

    let response = post_form(&app, "/signup", "username=alice&password=pw1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let original_hash = store.get("alice").unwrap();

    let response = post_form(&app, "/signup", "username=Alice&password=other").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_string(response).await.contains("already exists"));

    // The stored hash is untouched by the rejected signup.
    assert_eq!(store.get("alice").unwrap(), original_hash);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn wrong_password_sets_no_session() {
    let (app, _store, _dir) = test_app();

    post_form(&app, "/signup", "username=alice&password=pw1").await;

    let response = post_form(&app, "/login", "username=alice&password=wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert!(body_string(response).await.contains("Invalid username or password"));
}

#[tokio::test]
async fn unknown_user_sets_no_session() {
    let (app, _store, _dir) = test_app();

    let response = post_form(&app, "/login", "username=nobody&password=pw1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn forged_session_cookie_is_rejected() {
    let (app, _store, _dir) = test_app();

    // A token signed with a different secret must not pass the gate.
    let forged = SessionManager::new("attacker-secret", 24)
        .issue("alice")
        .unwrap();
    let response =
        get_with_cookie(&app, "/dashboard", &format!("wicket_session={forged}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn corrupt_store_behaves_as_empty() {
    let (app, store, _dir) = test_app();

    std::fs::write(store.path(), "{definitely not json").unwrap();

    // Login finds no users...
    let response = post_form(&app, "/login", "username=alice&password=pw1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // ...and signup starts a fresh store.
    let response = post_form(&app, "/signup", "username=alice&password=pw1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn health_endpoint_reports_version() {
    let (app, _store, _dir) = test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}
