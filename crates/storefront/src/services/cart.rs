//! The cart page.

use lush_petals_core::{Price, StoredItem};

use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// Shown instead of lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your shopping cart is empty. 🛒";

/// One cart card with its subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// The rendered cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

impl CartPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_CART_MESSAGE
    }

    /// Grand total, formatted for display.
    #[must_use]
    pub fn grand_total(&self) -> String {
        self.total.to_string()
    }
}

/// Renders the cart and handles its remove and clear controls.
#[derive(Debug, Clone)]
pub struct CartView<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> CartView<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Rebuild the page from the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be read.
    pub async fn render(&self) -> Result<CartPage, StorageError> {
        let cart: Vec<StoredItem> = self.store.get(keys::CART).await?;

        let mut total = Price::ZERO;
        let lines = cart
            .iter()
            .map(|item| {
                let subtotal = item.subtotal();
                total = total + subtotal;
                CartLine {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    image: item.image.clone(),
                    price: item.price.to_string(),
                    quantity: item.quantity(),
                    subtotal: subtotal.to_string(),
                }
            })
            .collect();

        Ok(CartPage { lines, total })
    }

    /// Drop every line with `id`, then rebuild the page.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be read or written.
    pub async fn remove(&self, id: &str) -> Result<CartPage, StorageError> {
        let mut cart: Vec<StoredItem> = self.store.get(keys::CART).await?;
        cart.retain(|item| item.id.as_str() != id);
        self.store.set(keys::CART, &cart).await?;
        tracing::debug!(id, "Cart line removed");

        self.render().await
    }

    /// Delete the cart key entirely, then rebuild the page.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be removed.
    pub async fn clear(&self) -> Result<CartPage, StorageError> {
        self.store.remove(keys::CART).await?;
        tracing::debug!("Cart cleared");

        self.render().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lush_petals_core::{Product, ProductId};

    use super::*;
    use crate::store::MemoryStorage;

    fn line(id: &str, price: &str, quantity: u32) -> StoredItem {
        StoredItem {
            quantity: Some(quantity),
            ..StoredItem::cart_entry(&Product {
                id: ProductId::parse(id).unwrap(),
                name: format!("Flower {id}"),
                price: price.parse().unwrap(),
                image: format!("{id}.jpg"),
            })
        }
    }

    async fn view_with(items: &[StoredItem]) -> (CartView<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = KeyedListStore::new(storage.clone());
        store.set(keys::CART, items).await.unwrap();
        (CartView::new(store), storage)
    }

    #[tokio::test]
    async fn test_empty_cart_renders_empty_state() {
        let view = CartView::new(KeyedListStore::new(MemoryStorage::new()));
        let page = view.render().await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.empty_message(), EMPTY_CART_MESSAGE);
        assert_eq!(page.grand_total(), "₹0.00");
    }

    #[tokio::test]
    async fn test_subtotals_and_grand_total() {
        let (view, _) = view_with(&[line("p1", "199", 2), line("p2", "249.5", 1)]).await;
        let page = view.render().await.unwrap();

        assert_eq!(page.lines[0].price, "₹199.00");
        assert_eq!(page.lines[0].quantity, 2);
        assert_eq!(page.lines[0].subtotal, "₹398.00");
        assert_eq!(page.lines[1].subtotal, "₹249.50");
        assert_eq!(page.grand_total(), "₹647.50");
    }

    #[tokio::test]
    async fn test_clear_removes_key() {
        let (view, storage) = view_with(&[line("p1", "199", 1)]).await;
        let page = view.clear().await.unwrap();

        assert!(page.is_empty());
        assert!(!storage.contains_key(keys::CART));
    }

    #[tokio::test]
    async fn test_remove_drops_every_match() {
        let (view, _) = view_with(&[
            line("p1", "199", 1),
            line("p2", "100", 1),
            line("p1", "199", 3),
        ])
        .await;

        let page = view.remove("p1").await.unwrap();
        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].id, "p2");
        assert_eq!(page.grand_total(), "₹100.00");
    }

    #[tokio::test]
    async fn test_remove_keeps_empty_list_stored() {
        let (view, storage) = view_with(&[line("p1", "199", 1)]).await;
        view.remove("p1").await.unwrap();

        let raw = storage.get_item(keys::CART).await.unwrap();
        assert_eq!(raw.as_deref(), Some("[]"));
    }
}
