//! Form DTOs for the auth routes

use serde::Deserialize;

/// Signup form submission
#[derive(Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

/// Login form submission
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
