//! JSON file-backed cart store.
//!
//! One document at a fixed path, with a schema tag as the only versioning:
//!
//! ```json
//! {
//!   "schema": 1,
//!   "saved_at": "2026-01-05T12:30:00Z",
//!   "entries": [
//!     { "name": "Pizza", "qty": 2, "price": "10.50", "image": "https://..." }
//!   ]
//! }
//! ```
//!
//! Entries are keyed by dish name and reloaded order-independently.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bistro_core::{Cart, DishName, ImageUrl};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartStore, StorageError};

/// Current on-disk schema version.
const SCHEMA_VERSION: u32 = 1;

/// One persisted cart entry.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedEntry {
    name: String,
    qty: u32,
    price: Decimal,
    image: String,
}

/// The whole persisted document.
#[derive(Debug, Serialize, Deserialize)]
struct CartDocument {
    schema: u32,
    saved_at: DateTime<Utc>,
    entries: Vec<PersistedEntry>,
}

/// Cart store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the parent directory
    /// cannot be created - the caller is expected to degrade to an
    /// in-memory cart.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::Unavailable(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        Ok(Self { path })
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, bytes: &[u8]) -> Option<Cart> {
        let document: CartDocument = match serde_json::from_slice(bytes) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "cart file is malformed, starting empty: {e}");
                return None;
            }
        };

        if document.schema != SCHEMA_VERSION {
            tracing::warn!(
                path = %self.path.display(),
                schema = document.schema,
                "unknown cart schema, starting empty"
            );
            return None;
        }

        let mut cart = Cart::new();
        for entry in document.entries {
            let Ok(name) = DishName::parse(&entry.name) else {
                tracing::warn!("skipping cart entry with invalid dish name {:?}", entry.name);
                continue;
            };
            if entry.qty == 0 {
                // never stored by us; external edits only
                tracing::warn!(dish = %name, "skipping cart entry with zero quantity");
                continue;
            }
            if entry.price.is_sign_negative() {
                tracing::warn!(dish = %name, "skipping cart entry with negative price");
                continue;
            }
            cart.add(name, entry.price, ImageUrl::new(&entry.image), entry.qty);
        }
        Some(cart)
    }
}

#[async_trait]
impl CartStore for JsonFileStore {
    async fn load_all(&self) -> Cart {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Cart::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to read cart file, starting empty: {e}");
                return Cart::new();
            }
        };

        self.decode(&bytes).unwrap_or_default()
    }

    async fn save_all(&self, cart: &Cart) -> Result<(), StorageError> {
        let document = CartDocument {
            schema: SCHEMA_VERSION,
            saved_at: Utc::now(),
            entries: cart
                .iter()
                .map(|(name, entry)| PersistedEntry {
                    name: name.as_str().to_owned(),
                    qty: entry.quantity,
                    price: entry.unit_price,
                    image: entry.image.as_str().to_owned(),
                })
                .collect(),
        };

        let json = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dish(name: &str) -> DishName {
        DishName::parse(name).unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("cart.json"))
            .await
            .unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut cart = Cart::new();
        cart.add(dish("Pizza"), "10.50".parse().unwrap(), ImageUrl::placeholder(), 2);
        cart.add(
            dish("Borscht"),
            "5".parse().unwrap(),
            ImageUrl::new("https://cdn.example.com/borscht.jpg"),
            1,
        );

        let store = JsonFileStore::open(&path).await.unwrap();
        store.save_all(&cart).await.unwrap();

        // fresh instance, same file
        let reopened = JsonFileStore::open(&path).await.unwrap();
        let loaded = reopened.load_all().await;
        assert_eq!(loaded, cart);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        let mut cart = Cart::new();
        cart.add(dish("Pizza"), "10".parse().unwrap(), ImageUrl::placeholder(), 1);
        store.save_all(&cart).await.unwrap();

        cart.remove(&dish("Pizza"));
        cart.add(dish("Pelmeni"), "7".parse().unwrap(), ImageUrl::placeholder(), 3);
        store.save_all(&cart).await.unwrap();

        let loaded = store.load_all().await;
        assert!(loaded.get(&dish("Pizza")).is_none());
        assert_eq!(loaded.get(&dish("Pelmeni")).unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_schema_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        tokio::fs::write(
            &path,
            br#"{"schema": 99, "saved_at": "2026-01-05T12:30:00Z", "entries": []}"#,
        )
        .await
        .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_quantity_entry_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        tokio::fs::write(
            &path,
            br#"{"schema": 1, "saved_at": "2026-01-05T12:30:00Z", "entries": [
                {"name": "Pizza", "qty": 0, "price": "10.50", "image": ""},
                {"name": "Borscht", "qty": 2, "price": "5", "image": ""}
            ]}"#,
        )
        .await
        .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let loaded = store.load_all().await;
        assert!(loaded.get(&dish("Pizza")).is_none());
        assert_eq!(loaded.get(&dish("Borscht")).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_negative_price_entry_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        tokio::fs::write(
            &path,
            br#"{"schema": 1, "saved_at": "2026-01-05T12:30:00Z", "entries": [
                {"name": "Pizza", "qty": 1, "price": "-10.50", "image": ""},
                {"name": "Borscht", "qty": 2, "price": "5", "image": ""}
            ]}"#,
        )
        .await
        .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let loaded = store.load_all().await;
        assert!(loaded.get(&dish("Pizza")).is_none());
        assert_eq!(loaded.get(&dish("Borscht")).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_schema_tag_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let store = JsonFileStore::open(&path).await.unwrap();
        store.save_all(&Cart::new()).await.unwrap();

        let raw = tokio::fs::read(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value["schema"], 1);
        assert!(value["saved_at"].is_string());
    }
}
