//! Wicket Authentication
//!
//! This crate provides Argon2id password hashing and the signed session
//! token carried in the `wicket_session` cookie.

pub mod error;
pub mod password;
pub mod session;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use session::{SESSION_COOKIE, SessionClaims, SessionManager, token_from_headers};
