//! Lush Petals Core - Shared record types.
//!
//! This crate provides the records persisted by the storefront:
//! - wishlist and cart entries ([`StoredItem`])
//! - product reviews ([`Review`])
//! - contact form submissions ([`Contact`])
//! - the last login attempt ([`LoginAttempt`])
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! The JSON shape of every record is part of its contract: field names and
//! value kinds match what the storefront has always written to visitor
//! storage, so existing data keeps decoding.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices, plus the stored records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
