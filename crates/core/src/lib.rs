//! Bistro Core - Shared domain types.
//!
//! This crate provides the common types used across all Bistro components:
//! - `client` - The ordering client (cart, menu, profile editing)
//! - `integration-tests` - Cross-component scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for dish names, images, and price parsing
//! - [`cart`] - The cart mapping, its entries, and the derived summary
//! - [`profile`] - Validated profile field types (passport, name, card, login, password)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod profile;
pub mod types;

pub use cart::*;
pub use types::*;
