//! Page components.
//!
//! Each component owns a [`KeyedListStore`](crate::store::KeyedListStore)
//! over the visitor's storage and implements one page's behavior. Route
//! handlers compose only the components their page needs.
//!
//! - [`catalog`] - wishlist toggle and add-to-cart on product cards
//! - [`wishlist`] - wishlist page with remove controls
//! - [`cart`] - cart page with totals, remove and clear controls
//! - [`reviews`] - review board
//! - [`contact`] - contact form intake
//! - [`login`] - simulated login capture

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod login;
pub mod reviews;
pub mod wishlist;

pub use cart::{CartLine, CartPage, CartView};
pub use catalog::{ProductCard, ProductCatalogBinding, WishlistIndicator};
pub use contact::ContactIntake;
pub use login::LoginIntake;
pub use reviews::{ReviewBoard, ReviewSubmission};
pub use wishlist::{WishlistCard, WishlistPage, WishlistView};
