//! Lush Petals storefront library.
//!
//! This crate provides the storefront pages as a library, allowing them to
//! be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
