//! Integration tests for Bistro.
//!
//! Cross-crate scenarios live in `tests/`:
//!
//! - `cart_roundtrip` - persistence through real files and fresh store
//!   instances
//! - `cart_scenarios` - end-to-end cart flows through the controller,
//!   both views attached
//!
//! Unit tests stay next to the code they cover; only scenarios that span
//! storage, state, and UI belong here.

#![cfg_attr(not(test), forbid(unsafe_code))]
