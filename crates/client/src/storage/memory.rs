//! In-memory cart store.
//!
//! Used by tests and as the degraded mode when no storage location is
//! usable: the page keeps working, the cart just does not survive it.

use std::sync::Mutex;

use async_trait::async_trait;
use bistro_core::Cart;

use super::{CartStore, StorageError};

/// Cart store that holds everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    cart: Mutex<Cart>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn load_all(&self) -> Cart {
        self.cart.lock().map(|cart| cart.clone()).unwrap_or_default()
    }

    async fn save_all(&self, cart: &Cart) -> Result<(), StorageError> {
        let mut guard = self
            .cart
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".to_owned()))?;
        *guard = cart.clone();
        Ok(())
    }
}
