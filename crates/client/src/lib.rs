//! Bistro Client - client-side ordering logic.
//!
//! This crate holds everything that runs on the ordering page itself:
//!
//! - [`storage`] - persistence adapter for the cart (JSON file or in-memory)
//! - [`cart`] - the cart state manager: mutations, persistence, change observers
//! - [`ui`] - view construction and event dispatch for the cart page and menu board
//! - [`profile`] - profile-edit form state, field validation, and the save client
//! - [`config`] - environment-driven configuration
//!
//! # Control flow
//!
//! Event -> handler -> state mutation -> persist -> notify observers ->
//! re-render. The single suspension point is the initial storage load;
//! every later write is best-effort and its failure is absorbed with a
//! warning, never surfaced to the user.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod profile;
pub mod storage;
pub mod ui;
