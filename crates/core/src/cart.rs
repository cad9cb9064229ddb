//! The cart: a mapping from dish name to quantity, price, and image.
//!
//! Entry quantities are always at least 1; decrementing an entry at
//! quantity 1 removes it rather than storing a zero. Insertion order is
//! preserved so renders are stable, but carries no other meaning.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{DishName, ImageUrl};

/// One dish's record within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// How many of this dish. Always >= 1 while the entry exists.
    pub quantity: u32,
    /// Price of a single serving.
    pub unit_price: Decimal,
    /// Image shown on the cart page.
    pub image: ImageUrl,
}

impl CartEntry {
    /// Line total for this entry (`quantity * unit_price`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Derived cart totals. Computed fresh on every request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Sum of all entry quantities.
    pub total_items: u64,
    /// Sum of `quantity * unit_price` over all entries.
    pub total_price: Decimal,
}

/// The user's selected dishes, keyed by dish name.
///
/// Pure in-memory state: persistence and rendering live in the client
/// crate. Every mutation returns whether it changed anything, so callers
/// can skip persisting and notifying after no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: IndexMap<DishName, CartEntry>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct dishes in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a dish's entry.
    #[must_use]
    pub fn get(&self, name: &DishName) -> Option<&CartEntry> {
        self.entries.get(name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DishName, &CartEntry)> {
        self.entries.iter()
    }

    /// Add `qty` of a dish, creating the entry if it does not exist.
    ///
    /// A `qty` of 0 is treated as 1 (the menu card's stepper never shows
    /// less than 1). Adding to an existing entry increments its quantity
    /// and backfills a real image over a placeholder.
    pub fn add(&mut self, name: DishName, unit_price: Decimal, image: ImageUrl, qty: u32) {
        let qty = qty.max(1);
        if let Some(entry) = self.entries.get_mut(&name) {
            entry.quantity = entry.quantity.saturating_add(qty);
            if entry.image.is_placeholder() && !image.is_placeholder() {
                entry.image = image;
            }
        } else {
            self.entries.insert(
                name,
                CartEntry {
                    quantity: qty,
                    unit_price,
                    image,
                },
            );
        }
    }

    /// Increment a tracked dish's quantity. Returns `false` if absent.
    pub fn increase(&mut self, name: &DishName) -> bool {
        self.entries.get_mut(name).is_some_and(|entry| {
            entry.quantity = entry.quantity.saturating_add(1);
            true
        })
    }

    /// Decrement a tracked dish's quantity, removing the entry when it
    /// would drop below 1. Returns `false` if absent.
    pub fn decrease(&mut self, name: &DishName) -> bool {
        let Some(entry) = self.entries.get_mut(name) else {
            return false;
        };
        if entry.quantity > 1 {
            entry.quantity -= 1;
        } else {
            // shift_remove keeps the remaining entries in insertion order
            self.entries.shift_remove(name);
        }
        true
    }

    /// Remove a dish entirely. Returns `false` if absent.
    pub fn remove(&mut self, name: &DishName) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    /// Remove every entry. Returns `false` if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Compute the derived totals over the current entries.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let mut summary = CartSummary::default();
        for entry in self.entries.values() {
            summary.total_items += u64::from(entry.quantity);
            summary.total_price += entry.line_total();
        }
        summary
    }
}

impl FromIterator<(DishName, CartEntry)> for Cart {
    fn from_iter<I: IntoIterator<Item = (DishName, CartEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
