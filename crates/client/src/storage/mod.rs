//! Cart persistence adapter.
//!
//! The cart is rewritten to storage in full on every mutation, so an
//! interrupted write is harmless: the next save overwrites whatever state
//! the storage was left in. Reads never fail upward - any problem loading
//! degrades to an empty cart with a warning.

mod json_file;
mod memory;

use async_trait::async_trait;
use bistro_core::Cart;
use thiserror::Error;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors that can occur in the storage adapter.
///
/// Only `save_all` and store construction surface these; loads absorb
/// every failure into an empty cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage location cannot be used at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent store for the cart mapping.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the full cart.
    ///
    /// Never propagates an error: a missing, unreadable, or malformed
    /// store yields an empty cart (logged at warn level).
    async fn load_all(&self) -> Cart;

    /// Overwrite the store with the current cart (clear, then write every
    /// entry). Best-effort; the caller decides whether to absorb the error.
    async fn save_all(&self, cart: &Cart) -> Result<(), StorageError>;
}
