//! Wishlist and cart controls on the product listing.

use lush_petals_core::{Product, StoredItem};

use crate::notify::Notifier;
use crate::store::{KeyedListStore, Storage, StorageError, keys};

/// State of a card's wishlist heart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistIndicator {
    Wishlisted,
    NotWishlisted,
}

impl WishlistIndicator {
    /// Heart color for this state.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Wishlisted => "red",
            Self::NotWishlisted => "#c2185b",
        }
    }

    /// Accessible label for the toggle button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wishlisted => "Remove from wishlist",
            Self::NotWishlisted => "Add to wishlist",
        }
    }
}

/// A product card with its wishlist heart pre-set.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product: Product,
    pub indicator: WishlistIndicator,
}

impl ProductCard {
    /// Whether the product is currently on the wishlist.
    #[must_use]
    pub fn is_wishlisted(&self) -> bool {
        self.indicator == WishlistIndicator::Wishlisted
    }
}

/// Attaches the wishlist toggle and add-to-cart behaviors to product cards.
#[derive(Debug, Clone)]
pub struct ProductCatalogBinding<S> {
    store: KeyedListStore<S>,
}

impl<S: Storage> ProductCatalogBinding<S> {
    #[must_use]
    pub const fn new(store: KeyedListStore<S>) -> Self {
        Self { store }
    }

    /// Build cards for `products`, marking those already on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the wishlist cannot be read.
    pub async fn bind(&self, products: &[Product]) -> Result<Vec<ProductCard>, StorageError> {
        let wishlist: Vec<StoredItem> = self.store.get(keys::WISHLIST).await?;

        Ok(products
            .iter()
            .map(|product| {
                let indicator = if wishlist.iter().any(|item| item.id == product.id) {
                    WishlistIndicator::Wishlisted
                } else {
                    WishlistIndicator::NotWishlisted
                };
                ProductCard {
                    product: product.clone(),
                    indicator,
                }
            })
            .collect())
    }

    /// Add `product` to the wishlist, or take it off if it is already there.
    ///
    /// Returns the card's new indicator state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the wishlist cannot be read or written.
    pub async fn toggle_wishlist(
        &self,
        product: &Product,
        notifier: &mut impl Notifier,
    ) -> Result<WishlistIndicator, StorageError> {
        let mut wishlist: Vec<StoredItem> = self.store.get(keys::WISHLIST).await?;

        let indicator = if wishlist.iter().any(|item| item.id == product.id) {
            wishlist.retain(|item| item.id != product.id);
            notifier.success(format!("{} removed from Wishlist!", product.name));
            WishlistIndicator::NotWishlisted
        } else {
            wishlist.push(StoredItem::wishlist_entry(product));
            notifier.success(format!("{} added to Wishlist!", product.name));
            WishlistIndicator::Wishlisted
        };

        self.store.set(keys::WISHLIST, &wishlist).await?;
        tracing::debug!(product_id = %product.id, ?indicator, "Wishlist toggled");
        Ok(indicator)
    }

    /// Put one more `product` in the cart.
    ///
    /// Returns the product's quantity after the add.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be read or written.
    pub async fn add_to_cart(
        &self,
        product: &Product,
        notifier: &mut impl Notifier,
    ) -> Result<u32, StorageError> {
        let mut cart: Vec<StoredItem> = self.store.get(keys::CART).await?;

        let quantity = if let Some(item) = cart.iter_mut().find(|item| item.id == product.id) {
            let quantity = item.quantity().saturating_add(1);
            item.quantity = Some(quantity);
            notifier.success(format!(
                "Added another {} to Cart! (Quantity: {quantity})",
                product.name
            ));
            quantity
        } else {
            cart.push(StoredItem::cart_entry(product));
            notifier.success(format!("{} added to Cart!", product.name));
            1
        };

        self.store.set(keys::CART, &cart).await?;
        tracing::debug!(product_id = %product.id, quantity, "Added to cart");
        Ok(quantity)
    }
}
