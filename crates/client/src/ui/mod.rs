//! UI synchronization: view construction and event dispatch.
//!
//! Two render targets exist - the cart page and the per-dish quantity
//! widgets on the menu board. Both are rebuilt from scratch on every
//! cart change (no diffing) and both receive their output surface by
//! injection rather than looking it up from ambient context.

mod controller;
mod menu;
mod nav;
mod views;

pub use controller::{UiController, UiEvent};
pub use menu::{CardWidget, MenuBoard, MenuCardView, MenuDish, MenuSurface};
pub use nav::{NavigationSurface, Navigator, Route};
pub use views::{CartItemView, CartPageSurface, CartPageView, EMPTY_CART_MESSAGE};
