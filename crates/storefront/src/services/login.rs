//! Simulated login capture.
//!
//! Nothing is verified. The submitted credentials overwrite the single
//! `lastLoginAttempt` record, password included, in plain text.

use chrono::{DateTime, Utc};
use lush_petals_core::LoginAttempt;

use crate::notify::Notifier;
use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Records the most recent login form submission.
#[derive(Debug, Clone)]
pub struct LoginIntake<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> LoginIntake<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Overwrite the stored attempt with one made at `now`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the attempt cannot be written.
    pub async fn submit(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
        notifier: &mut impl Notifier,
    ) -> Result<LoginAttempt, StorageError> {
        let attempt = LoginAttempt::new(email, password, now);
        self.store
            .set_value(keys::LAST_LOGIN_ATTEMPT, &attempt)
            .await?;

        tracing::info!(email = %attempt.email, "Login attempt recorded");
        notifier.success(format!(
            "Login simulated for: {}. Details stored locally.",
            attempt.email
        ));
        Ok(attempt)
    }

    /// The stored attempt, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn last_attempt(&self) -> Result<Option<LoginAttempt>, StorageError> {
        self.store.get_value(keys::LAST_LOGIN_ATTEMPT).await
    }
}
