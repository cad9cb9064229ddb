//! Menu board synchronization.
//!
//! Each menu card shows either an "add to cart" button or a quantity
//! stepper, depending on whether the dish is currently in the cart. The
//! board re-applies the widget state to every card after any mutation,
//! wherever it originated - this is the manual fan-out that keeps the
//! menu and the cart page consistent.

use bistro_core::{Cart, DishName, ImageUrl};

/// Static data a menu card carries.
#[derive(Debug, Clone)]
pub struct MenuDish {
    pub name: DishName,
    /// Price as displayed on the card (e.g. `"250 ₽"`), parsed on add.
    pub display_price: String,
    pub image: ImageUrl,
}

/// The quantity control of one menu card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardWidget {
    /// Dish not in cart: show the add affordance.
    AddButton,
    /// Dish in cart with this quantity: show the stepper.
    QuantityStepper(u32),
}

/// One menu card's rendered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCardView {
    pub name: DishName,
    pub widget: CardWidget,
}

/// Output surface the menu board renders into.
pub trait MenuSurface: Send {
    /// Replace every card's widget state.
    fn render(&mut self, cards: &[MenuCardView]);
}

/// All menu cards plus their injected output surface.
pub struct MenuBoard {
    dishes: Vec<MenuDish>,
    surface: Box<dyn MenuSurface>,
}

impl MenuBoard {
    /// Build a board over `dishes`, rendering into `surface`.
    pub fn new(dishes: Vec<MenuDish>, surface: Box<dyn MenuSurface>) -> Self {
        Self { dishes, surface }
    }

    /// The dishes on the board.
    #[must_use]
    pub fn dishes(&self) -> &[MenuDish] {
        &self.dishes
    }

    /// Find a dish's card data by name.
    #[must_use]
    pub fn dish(&self, name: &DishName) -> Option<&MenuDish> {
        self.dishes.iter().find(|d| &d.name == name)
    }

    /// Recompute every card's widget from the cart and push to the surface.
    pub fn sync(&mut self, cart: &Cart) {
        let cards = Self::cards_for(&self.dishes, cart);
        self.surface.render(&cards);
    }

    /// Widget states for `dishes` against `cart`.
    #[must_use]
    pub fn cards_for(dishes: &[MenuDish], cart: &Cart) -> Vec<MenuCardView> {
        dishes
            .iter()
            .map(|dish| MenuCardView {
                name: dish.name.clone(),
                widget: cart
                    .get(&dish.name)
                    .map_or(CardWidget::AddButton, |entry| {
                        CardWidget::QuantityStepper(entry.quantity)
                    }),
            })
            .collect()
    }
}
