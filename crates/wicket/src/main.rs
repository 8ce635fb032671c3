//! Wicket - minimal username/password authentication service

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use config::Config;
use wicket_auth::SessionManager;
use wicket_store::UserStore;
use wicket_web::{AppState, create_router};

/// Wicket - signup, login and a session-gated dashboard over a flat JSON
/// credential file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "WICKET_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "WICKET_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    init_logging(&config.logging.level, &config.logging.format);

    info!("Starting Wicket v{}", env!("CARGO_PKG_VERSION"));

    // Make sure the credential file's directory exists
    if let Some(parent) = Path::new(&config.store.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // Credential store and session signing
    let store = Arc::new(UserStore::new(&config.store.path));
    let sessions = Arc::new(SessionManager::new(
        &config.session.secret,
        config.session.ttl_hours,
    ));

    // Install the Prometheus recorder
    let metrics_handle = Arc::new(PrometheusBuilder::new().install_recorder()?);

    // Create application state
    let state = AppState::new(store, sessions);

    // Create router
    let app = create_router(state, Some(metrics_handle)).layer(TraceLayer::new_for_http());

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port).parse()?;

    info!("Listening on {}", addr);
    info!("Credential store: {}", config.store.path);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    info!("Shutdown signal received");
}
