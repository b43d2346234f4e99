//! Core types for Lush Petals.
//!
//! This module provides type-safe wrappers and the records kept in visitor
//! storage.

pub mod contact;
pub mod id;
pub mod item;
pub mod login;
pub mod price;
pub mod review;

pub use contact::Contact;
pub use id::{ContactId, ProductId, ProductIdError};
pub use item::{Product, StoredItem};
pub use login::LoginAttempt;
pub use price::{CURRENCY_SYMBOL, Price, PriceError};
pub use review::Review;
