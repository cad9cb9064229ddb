//! The cart state manager.
//!
//! Owns the in-memory cart and the storage handle. Every effective
//! mutation persists the full cart and then notifies the registered
//! observers; no-op mutations (touching a dish that is not in the cart,
//! clearing an empty cart) do neither.
//!
//! Persistence failures are absorbed here: the in-memory cart stays
//! authoritative for the page's lifetime and the next mutation will
//! rewrite storage in full anyway.

use std::sync::Arc;

use bistro_core::{Cart, CartEntry, CartSummary, DishName, ImageUrl};
use rust_decimal::Decimal;

use crate::storage::CartStore;

/// Callback invoked with the cart after every effective mutation.
pub type CartObserver = Box<dyn Fn(&Cart) + Send + Sync>;

/// Owns the cart, persists it, and fans out changes to observers.
pub struct CartManager {
    cart: Cart,
    store: Arc<dyn CartStore>,
    observers: Vec<CartObserver>,
}

impl CartManager {
    /// Load the cart from `store` and build a manager around it.
    ///
    /// This is the single suspension point of the whole component: the
    /// page waits for it before wiring any cart-dependent UI.
    pub async fn initialize(store: Arc<dyn CartStore>) -> Self {
        let cart = store.load_all().await;
        tracing::info!(dishes = cart.len(), "cart loaded");
        Self {
            cart,
            store,
            observers: Vec::new(),
        }
    }

    /// Register a change observer. Observers fire after every effective
    /// mutation, once storage has been written (or the write absorbed).
    pub fn subscribe(&mut self, observer: impl Fn(&Cart) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Look up one dish's entry.
    #[must_use]
    pub fn get(&self, name: &DishName) -> Option<&CartEntry> {
        self.cart.get(name)
    }

    /// Derived totals over the current entries, computed fresh.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Add `qty` of a dish (default 1 at the call sites), creating the
    /// entry or incrementing an existing one.
    pub async fn add_item(&mut self, name: DishName, unit_price: Decimal, image: ImageUrl, qty: u32) {
        self.cart.add(name, unit_price, image, qty);
        self.persist_and_notify().await;
    }

    /// Increment a tracked dish. No-op if the dish is not in the cart.
    pub async fn increase_item(&mut self, name: &DishName) {
        if self.cart.increase(name) {
            self.persist_and_notify().await;
        }
    }

    /// Decrement a tracked dish, removing it at quantity 1. No-op if the
    /// dish is not in the cart.
    pub async fn decrease_item(&mut self, name: &DishName) {
        if self.cart.decrease(name) {
            self.persist_and_notify().await;
        }
    }

    /// Remove a dish entirely. No-op if the dish is not in the cart.
    pub async fn remove_item(&mut self, name: &DishName) {
        if self.cart.remove(name) {
            self.persist_and_notify().await;
        }
    }

    /// Empty the cart. No-op if it is already empty.
    pub async fn clear(&mut self) {
        if self.cart.clear() {
            self.persist_and_notify().await;
        }
    }

    async fn persist_and_notify(&self) {
        if let Err(e) = self.store.save_all(&self.cart).await {
            // best-effort: the next mutation rewrites storage in full
            tracing::warn!("failed to persist cart: {e}");
        }
        for observer in &self.observers {
            observer(&self.cart);
        }
    }
}
