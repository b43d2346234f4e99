//! User-facing notifications.
//!
//! Components report the outcome of every mutating action through a
//! [`Notifier`]. Route handlers collect notices in a `Vec<Notice>`, stash
//! them in the visitor's store with [`stash`], and the next page render picks
//! them up with [`take`] and shows them in the banner.

use serde::{Deserialize, Serialize};

use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    /// CSS modifier class for the banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice-success",
            Self::Error => "notice-error",
            Self::Info => "notice-info",
        }
    }
}

/// A single message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notifier {
    /// Deliver a notice.
    fn notify(&mut self, notice: Notice);

    /// Report a completed action.
    fn success(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Report a rejected action.
    fn error(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    /// Report something neutral.
    fn info(&mut self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Queue `notices` for the next page render.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read or written.
pub async fn stash<S: Storage>(
    store: &KeyedListStore<S>,
    notices: Vec<Notice>,
) -> Result<(), StorageError> {
    if notices.is_empty() {
        return Ok(());
    }
    let mut pending: Vec<Notice> = store.get(keys::FLASH_NOTICES).await?;
    pending.extend(notices);
    store.set(keys::FLASH_NOTICES, &pending).await
}

/// Remove and return all queued notices.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read or written.
pub async fn take<S: Storage>(store: &KeyedListStore<S>) -> Result<Vec<Notice>, StorageError> {
    let pending: Vec<Notice> = store.get(keys::FLASH_NOTICES).await?;
    if !pending.is_empty() {
        store.remove(keys::FLASH_NOTICES).await?;
    }
    Ok(pending)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn test_vec_collects_in_order() {
        let mut notices = Vec::new();
        notices.success("saved");
        notices.error("nope");
        notices.info("fyi");

        let levels: Vec<_> = notices.iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            vec![NoticeLevel::Success, NoticeLevel::Error, NoticeLevel::Info]
        );
        assert_eq!(notices[0].message, "saved");
    }

    #[tokio::test]
    async fn test_stash_then_take_once() {
        let store = KeyedListStore::new(MemoryStorage::new());
        let mut notices = Vec::new();
        notices.success("Rose added to Cart!");
        stash(&store, notices).await.unwrap();

        let shown = take(&store).await.unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, "Rose added to Cart!");

        assert!(take(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stash_accumulates() {
        let store = KeyedListStore::new(MemoryStorage::new());
        let mut first = Vec::new();
        first.success("one");
        let mut second = Vec::new();
        second.info("two");
        stash(&store, first).await.unwrap();
        stash(&store, second).await.unwrap();

        let shown = take(&store).await.unwrap();
        let messages: Vec<_> = shown.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_stash_nothing_writes_nothing() {
        let storage = MemoryStorage::new();
        let store = KeyedListStore::new(storage.clone());
        stash(&store, Vec::new()).await.unwrap();
        assert!(!storage.contains_key(keys::FLASH_NOTICES));
    }
}
