//! Signed session tokens and the cookie that carries them

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "wicket_session";

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (the logged-in username, already case-folded)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Issues and validates the signed session tokens.
///
/// The signing secret is injected from configuration; there is no process
/// global. Tokens are self-contained, so no server-side session state exists
/// to clean up on logout.
#[derive(Clone)]
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl SessionManager {
    /// Create a session manager from the configured signing secret.
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Issue a signed session token for a username.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.ttl_hours);

        let claims = SessionClaims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        debug!("Issuing session token for user: {}", username);

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::Jwt)
    }

    /// Validate a session token and return its claims.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)?;

        // Check expiration
        let now = Utc::now().timestamp();
        if token_data.claims.exp < now {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Build the `Set-Cookie` value that establishes a session.
    ///
    /// No Max-Age is set: the cookie lives for the browser session while the
    /// token itself carries the hard expiry.
    pub fn session_cookie(&self, token: &str) -> Result<HeaderValue, AuthError> {
        let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
        HeaderValue::from_str(&cookie).map_err(AuthError::Cookie)
    }

    /// Build the `Set-Cookie` value that destroys a session.
    pub fn clear_cookie(&self) -> HeaderValue {
        HeaderValue::from_static("wicket_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

/// Extract the session token from a request's `Cookie` header, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE {
            return Some(val.to_string());
        }
    }
    None
}
