//! Application state

use std::sync::Arc;
use wicket_auth::SessionManager;
use wicket_store::UserStore;

/// Prometheus recorder handle rendered by the metrics endpoint.
pub type MetricsHandle = metrics_exporter_prometheus::PrometheusHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, sessions: Arc<SessionManager>) -> Self {
        Self { store, sessions }
    }
}
