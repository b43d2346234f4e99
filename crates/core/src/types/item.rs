//! Catalog products and the wishlist/cart entries derived from them.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product card as offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

/// An entry in the wishlist or the cart.
///
/// Cart entries carry a `quantity`; wishlist entries leave it out entirely, so
/// a wishlist entry serializes as `{id, name, price, image}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub image: String,
}

impl StoredItem {
    /// A wishlist entry for `product`.
    #[must_use]
    pub fn wishlist_entry(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: None,
            image: product.image.clone(),
        }
    }

    /// A fresh cart entry for `product` with quantity 1.
    #[must_use]
    pub fn cart_entry(product: &Product) -> Self {
        Self {
            quantity: Some(1),
            ..Self::wishlist_entry(product)
        }
    }

    /// Units in the cart. Entries stored without a quantity count as one.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity())
    }
}
