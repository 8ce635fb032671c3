//! HTTP routes

mod auth;
mod dashboard;
mod health;
pub mod metrics;
mod types;

pub use dashboard::SessionUser;

use axum::Router;
use std::sync::Arc;

use crate::state::{AppState, MetricsHandle};

/// Create the main router
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let mut router = Router::new()
        // Health check
        .merge(health::routes())
        // Signup / login / logout
        .merge(auth::routes())
        // Protected page
        .merge(dashboard::routes())
        .with_state(state);

    // Add metrics endpoint if handle is provided
    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::routes(handle));
    }

    router
}
