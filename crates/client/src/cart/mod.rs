//! Cart state management.

mod manager;

pub use manager::CartManager;
