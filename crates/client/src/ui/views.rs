//! Cart page view construction.

use bistro_core::{Cart, format_rub};

/// Message shown in place of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    /// Unit price, formatted (e.g. `"10.50 ₽"`).
    pub unit_price: String,
    /// Line total, formatted.
    pub line_total: String,
    pub image: String,
}

/// The whole cart page, rebuilt from scratch on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageView {
    pub items: Vec<CartItemView>,
    /// Placeholder text, present only when the cart is empty.
    pub placeholder: Option<&'static str>,
    /// Item count line (e.g. `"2 pcs"`).
    pub total_items: String,
    /// Total price line (e.g. `"21.00 ₽"`).
    pub total_price: String,
}

impl CartPageView {
    /// Build the page view from the current cart state.
    #[must_use]
    pub fn build(cart: &Cart) -> Self {
        let items: Vec<CartItemView> = cart
            .iter()
            .map(|(name, entry)| CartItemView {
                name: name.as_str().to_owned(),
                quantity: entry.quantity,
                unit_price: format_rub(entry.unit_price),
                line_total: format_rub(entry.line_total()),
                image: entry.image.as_str().to_owned(),
            })
            .collect();

        let summary = cart.summary();
        Self {
            placeholder: items.is_empty().then_some(EMPTY_CART_MESSAGE),
            items,
            total_items: format!("{} pcs", summary.total_items),
            total_price: format_rub(summary.total_price),
        }
    }
}

/// Output surface the cart page renders into.
///
/// Injected at construction time; the page never reaches into ambient
/// context to find its target.
pub trait CartPageSurface: Send {
    /// Replace the rendered cart page with `view`.
    fn render(&mut self, view: &CartPageView);
}
