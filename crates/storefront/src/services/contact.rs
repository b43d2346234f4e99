//! Contact form intake.

use chrono::{DateTime, Local, Utc};
use lush_petals_core::{Contact, ContactId};

use crate::notify::Notifier;
use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Appends contact form submissions to storage.
#[derive(Debug, Clone)]
pub struct ContactIntake<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> ContactIntake<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Store a submission received at `now`.
    ///
    /// Fields are trimmed and otherwise accepted as-is, empty or not.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the contacts cannot be read or written.
    pub async fn submit(
        &self,
        name: &str,
        phone: &str,
        message: &str,
        now: DateTime<Utc>,
        notifier: &mut impl Notifier,
    ) -> Result<Contact, StorageError> {
        let mut contacts: Vec<Contact> = self.store.get(keys::CONTACTS).await?;

        let latest = contacts.iter().map(|c| c.id).max();
        let id = ContactId::allocate(now.timestamp_millis(), latest);
        let contact = Contact::received(id, name, phone, message, &now.with_timezone(&Local));

        contacts.push(contact.clone());
        self.store.set(keys::CONTACTS, &contacts).await?;

        tracing::info!(contact_id = %contact.id, "Contact message stored");
        notifier.success(
            "Thank you for your message! Your contact details have been stored locally.",
        );
        Ok(contact)
    }
}
