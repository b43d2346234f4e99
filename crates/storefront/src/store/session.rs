//! Session-backed storage.
//!
//! Each browsing context gets its own tower-sessions session, identified by
//! the session cookie. Values are kept as JSON text, one session entry per
//! storage key.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use super::{KeyedListStore, Storage, StorageError};

/// A [`Storage`] backend over the visitor's session.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session: Session,
}

impl SessionStorage {
    /// Wrap a session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Storage for SessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.session.get::<String>(key).await?)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        Ok(self.session.insert(key, value).await?)
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.session.remove_value(key).await?;
        Ok(())
    }
}

/// Extractor for the current visitor's store.
///
/// Requires the session layer; without it extraction fails with
/// `500 Internal Server Error`.
#[derive(Debug, Clone)]
pub struct VisitorStore(pub KeyedListStore<SessionStorage>);

impl<S> FromRequestParts<S> for VisitorStore
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self(KeyedListStore::new(SessionStorage::new(session))))
    }
}

