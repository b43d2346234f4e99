//! Visitor-scoped key-value storage.
//!
//! Every page keeps its state as JSON text under a fixed key in a store that
//! belongs to one visitor. The backend is injected through the [`Storage`]
//! trait:
//!
//! - [`SessionStorage`] - one tower-sessions session per browsing context
//! - [`MemoryStorage`] - a shared in-memory map (tests, embedding)
//!
//! [`KeyedListStore`] layers typed JSON access on top of a backend.
//!
//! # Concurrency
//!
//! Each component performs an unprotected read-modify-write of its key. Two
//! requests from the same visitor racing on one key can overwrite each
//! other's changes; the last write wins.

pub mod memory;
pub mod session;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use memory::MemoryStorage;
pub use session::SessionStorage;

/// Storage keys used by the storefront.
pub mod keys {
    /// Wishlist entries (`StoredItem` without quantity).
    pub const WISHLIST: &str = "wishlist";

    /// Cart entries (`StoredItem` with quantity).
    pub const CART: &str = "shoppingCart";

    /// Submitted reviews, oldest first.
    pub const REVIEWS: &str = "userReviews";

    /// Contact form submissions, oldest first.
    pub const CONTACTS: &str = "contacts";

    /// The most recent login attempt (a single record, not a list).
    pub const LAST_LOGIN_ATTEMPT: &str = "lastLoginAttempt";

    /// Notices waiting to be shown on the next page render.
    pub const FLASH_NOTICES: &str = "flashNotices";
}

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A record could not be encoded as JSON.
    #[error("Failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<tower_sessions::session::Error> for StorageError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// A raw text key-value backend.
///
/// Implementations store opaque text; decoding is the caller's business.
pub trait Storage: Send + Sync {
    /// Fetch the text stored under `key`, if any.
    fn get_item(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing whatever was there.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete `key` entirely.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Typed JSON access to a [`Storage`] backend.
///
/// Stored text that fails to decode is treated as absent: the failure is
/// logged and readers see an empty list (or no value). The next write
/// replaces the bad text.
#[derive(Debug, Clone)]
pub struct KeyedListStore<S> {
    storage: S,
}

impl<S: Storage> KeyedListStore<S> {
    /// Wrap a storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the list stored under `key`, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend read fails.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        Ok(self.get_value(key).await?.unwrap_or_default())
    }

    /// Replace the list stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        records: &[T],
    ) -> Result<(), StorageError> {
        self.set_value(key, records).await
    }

    /// Delete `key`. Later reads see an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend delete fails.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).await
    }

    /// Read a single record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend read fails.
    pub async fn get_value<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get_item(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored value");
                Ok(None)
            }
        }
    }

    /// Store a single record under `key`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub async fn set_value<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set_item(key, raw).await
    }
}
