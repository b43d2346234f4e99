//! Integration tests for the Lush Petals storefront.
//!
//! Each test starts the full application on an ephemeral port with
//! in-memory sessions and talks to it over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lush-petals-integration-tests
//! ```

use std::net::SocketAddr;

use lush_petals_storefront::catalog::{Catalog, CatalogError};
use lush_petals_storefront::config::StorefrontConfig;
use lush_petals_storefront::middleware::memory_session_layer;
use lush_petals_storefront::routes;
use lush_petals_storefront::state::AppState;
use thiserror::Error;

/// Catalog served by test instances.
pub const TEST_CATALOG: &str = r#"[
    {"id": "p1", "name": "Red Roses Bouquet", "price": 199, "image": "/static/images/red-roses.svg"},
    {"id": "p2", "name": "Pink Lilies", "price": 249, "image": "/static/images/pink-lilies.svg"},
    {"id": "p4", "name": "White Orchids", "price": 449.5, "image": "/static/images/white-orchids.svg"}
]"#;

/// Errors starting a test server.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("invalid test catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to bind test listener: {0}")]
    Io(#[from] std::io::Error),
}

/// A running storefront instance.
#[derive(Debug, Clone, Copy)]
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start the storefront with [`TEST_CATALOG`].
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is invalid or no port can be bound.
    pub async fn spawn() -> Result<Self, SpawnError> {
        Self::spawn_with_catalog(TEST_CATALOG).await
    }

    /// Start the storefront with the given catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is invalid or no port can be bound.
    pub async fn spawn_with_catalog(catalog_json: &str) -> Result<Self, SpawnError> {
        let config = StorefrontConfig::default();
        let catalog = Catalog::from_json_str(catalog_json)?;
        let sessions = memory_session_layer(&config);
        let app = routes::app(AppState::new(config, catalog), sessions);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr })
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A new visitor: a client with its own cookie jar, and so its own
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the client cannot be built.
    pub fn visitor() -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().cookie_store(true).build()
    }
}
