//! Lush Petals Storefront - flower shop site.
//!
//! This binary serves the storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - Product catalog loaded from a JSON file at startup
//! - Visitor state (wishlist, cart, reviews, contacts, login attempts) kept
//!   in tower-sessions sessions, in memory or `PostgreSQL`

#![cfg_attr(not(test), forbid(unsafe_code))]

use lush_petals_storefront::catalog::Catalog;
use lush_petals_storefront::config::{LogFormat, SessionBackend, StorefrontConfig};
use lush_petals_storefront::middleware::{memory_session_layer, postgres_session_layer};
use lush_petals_storefront::routes;
use lush_petals_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for our crate if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lush_petals_storefront=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    init_tracing(config.log_format);

    let catalog = Catalog::load(&config.catalog_path).expect("Failed to load product catalog");
    let state = AppState::new(config.clone(), catalog);

    let app = match &config.sessions {
        SessionBackend::Memory => {
            tracing::info!("Using in-memory session store");
            routes::app(state, memory_session_layer(&config))
        }
        SessionBackend::Postgres { database_url } => {
            let sessions = postgres_session_layer(database_url, &config)
                .await
                .expect("Failed to create PostgreSQL session store");
            routes::app(state, sessions)
        }
    };

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
