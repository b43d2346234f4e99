//! Session middleware configuration.
//!
//! Visitor storage lives in tower-sessions sessions, either in process memory
//! or in `PostgreSQL`.

use secrecy::SecretString;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StorefrontConfig;
use crate::db;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "lp_session";

/// Session expiry time in seconds (30 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Create a session layer over any store.
#[must_use]
pub fn create_session_layer<S>(store: S, config: &StorefrontConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Create a session layer backed by process memory.
#[must_use]
pub fn memory_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    create_session_layer(MemoryStore::default(), config)
}

/// Create a session layer backed by `PostgreSQL`.
///
/// Creates the session table if it does not exist yet.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable or the table cannot
/// be created.
pub async fn postgres_session_layer(
    database_url: &SecretString,
    config: &StorefrontConfig,
) -> Result<SessionManagerLayer<PostgresStore>, sqlx::Error> {
    let pool = db::create_pool(database_url).await?;
    let store = PostgresStore::new(pool);
    store.migrate().await?;
    tracing::info!("PostgreSQL session store ready");

    Ok(create_session_layer(store, config))
}
