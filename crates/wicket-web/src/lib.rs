//! Wicket HTTP layer
//!
//! This crate provides the Axum-based HTTP surface for Wicket: the signup
//! and login forms, the session-gated dashboard, and the liveness/metrics
//! endpoints.

pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

pub use error::PageError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
