//! The wishlist page.

use lush_petals_core::StoredItem;

use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Shown instead of cards when the wishlist is empty.
pub const EMPTY_WISHLIST_MESSAGE: &str =
    "Your wishlist is empty. Start adding some lovely blooms! 🌸";

/// One wishlist card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
}

impl From<&StoredItem> for WishlistCard {
    fn from(item: &StoredItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            price: item.price.to_string(),
        }
    }
}

/// The rendered wishlist: cards in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistPage {
    pub cards: Vec<WishlistCard>,
}

impl WishlistPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_WISHLIST_MESSAGE
    }
}

/// Renders the wishlist and handles its remove controls.
#[derive(Debug, Clone)]
pub struct WishlistView<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> WishlistView<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Rebuild the page from the stored wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the wishlist cannot be read.
    pub async fn render(&self) -> Result<WishlistPage, StorageError> {
        let wishlist: Vec<StoredItem> = self.store.get(keys::WISHLIST).await?;
        Ok(WishlistPage {
            cards: wishlist.iter().map(WishlistCard::from).collect(),
        })
    }

    /// Drop every entry with `id`, then rebuild the page.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the wishlist cannot be read or written.
    pub async fn remove(&self, id: &str) -> Result<WishlistPage, StorageError> {
        let mut wishlist: Vec<StoredItem> = self.store.get(keys::WISHLIST).await?;
        let before = wishlist.len();
        wishlist.retain(|item| item.id.as_str() != id);
        self.store.set(keys::WISHLIST, &wishlist).await?;
        tracing::debug!(id, removed = before - wishlist.len(), "Wishlist entry removed");

        self.render().await
    }
}
