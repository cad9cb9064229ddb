//! Event dispatch: DOM-equivalent events routed into cart mutations.
//!
//! The controller wires the two views to the cart manager as observers,
//! so a mutation originating on either page fans out to both. Control
//! flow per event: handler -> state mutation -> persist -> notify ->
//! re-render.

use std::sync::{Arc, Mutex};

use bistro_core::{Cart, DishName, PricePolicy, parse_display_price};

use crate::cart::CartManager;
use crate::error::Result;
use crate::ui::menu::{MenuBoard, MenuDish, MenuSurface};
use crate::ui::nav::{NavigationSurface, Navigator, Route};
use crate::ui::views::{CartPageSurface, CartPageView};

/// Events the host page feeds into the controller.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Add button on a menu card, with the stepper's current value.
    AddToCart { name: DishName, qty: u32 },
    /// Stepper `+`, on either page.
    Increase(DishName),
    /// Stepper `-`, on either page.
    Decrease(DishName),
    /// Per-item delete button on the cart page.
    Remove(DishName),
    /// "Remove all" button on the cart page.
    ClearCart,
    /// Navigation to the menu view.
    ShowMenu,
    /// Navigation to the cart view.
    ShowCart,
}

/// Wires views, navigation, and the cart manager together.
pub struct UiController {
    manager: CartManager,
    cart_page: Arc<Mutex<Box<dyn CartPageSurface>>>,
    menu: Arc<Mutex<MenuBoard>>,
    navigator: Navigator,
    price_policy: PricePolicy,
}

impl UiController {
    /// Build the controller, subscribe both views to cart changes, and
    /// perform the initial render of each.
    pub fn new(
        mut manager: CartManager,
        cart_surface: Box<dyn CartPageSurface>,
        dishes: Vec<MenuDish>,
        menu_surface: Box<dyn MenuSurface>,
        nav_surface: Box<dyn NavigationSurface>,
        price_policy: PricePolicy,
    ) -> Self {
        let cart_page = Arc::new(Mutex::new(cart_surface));
        let menu = Arc::new(Mutex::new(MenuBoard::new(dishes, menu_surface)));

        let page = Arc::clone(&cart_page);
        manager.subscribe(move |cart: &Cart| {
            if let Ok(mut surface) = page.lock() {
                surface.render(&CartPageView::build(cart));
            }
        });

        let board = Arc::clone(&menu);
        manager.subscribe(move |cart: &Cart| {
            if let Ok(mut board) = board.lock() {
                board.sync(cart);
            }
        });

        // initial render from the freshly loaded cart
        if let Ok(mut surface) = cart_page.lock() {
            surface.render(&CartPageView::build(manager.cart()));
        }
        if let Ok(mut board) = menu.lock() {
            board.sync(manager.cart());
        }

        Self {
            manager,
            cart_page,
            menu,
            navigator: Navigator::new(nav_surface),
            price_policy,
        }
    }

    /// The cart manager, for summary queries.
    #[must_use]
    pub fn manager(&self) -> &CartManager {
        &self.manager
    }

    /// The active route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Route one event into the state manager or the navigator.
    ///
    /// # Errors
    ///
    /// Returns an error only when adding a dish whose display price is
    /// malformed and the price policy is [`PricePolicy::Reject`].
    pub async fn handle(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::AddToCart { name, qty } => {
                let Some(dish) = self.card_data(&name) else {
                    tracing::warn!(dish = %name, "add requested for a dish not on the menu");
                    return Ok(());
                };
                let unit_price = parse_display_price(&dish.display_price, self.price_policy)?;
                self.manager.add_item(name, unit_price, dish.image, qty).await;
            }
            UiEvent::Increase(name) => self.manager.increase_item(&name).await,
            UiEvent::Decrease(name) => self.manager.decrease_item(&name).await,
            UiEvent::Remove(name) => self.manager.remove_item(&name).await,
            UiEvent::ClearCart => self.manager.clear().await,
            UiEvent::ShowMenu => self.navigator.go(Route::Menu),
            UiEvent::ShowCart => {
                // the cart page re-renders on entry, like on every mutation
                if let Ok(mut surface) = self.cart_page.lock() {
                    surface.render(&CartPageView::build(self.manager.cart()));
                }
                self.navigator.go(Route::Cart);
            }
        }
        Ok(())
    }

    fn card_data(&self, name: &DishName) -> Option<MenuDish> {
        self.menu
            .lock()
            .ok()
            .and_then(|board| board.dish(name).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::ImageUrl;

    use super::*;
    use crate::storage::MemoryStore;
    use crate::ui::menu::{CardWidget, MenuCardView};

    #[derive(Default)]
    struct Recorded {
        cart_renders: Vec<CartPageView>,
        menu_renders: Vec<Vec<MenuCardView>>,
        routes: Vec<Route>,
    }

    struct RecordingCartSurface(Arc<Mutex<Recorded>>);
    struct RecordingMenuSurface(Arc<Mutex<Recorded>>);
    struct RecordingNavSurface(Arc<Mutex<Recorded>>);

    impl CartPageSurface for RecordingCartSurface {
        fn render(&mut self, view: &CartPageView) {
            self.0.lock().unwrap().cart_renders.push(view.clone());
        }
    }

    impl MenuSurface for RecordingMenuSurface {
        fn render(&mut self, cards: &[MenuCardView]) {
            self.0.lock().unwrap().menu_renders.push(cards.to_vec());
        }
    }

    impl NavigationSurface for RecordingNavSurface {
        fn navigate(&mut self, route: Route) {
            self.0.lock().unwrap().routes.push(route);
        }
    }

    fn dish(name: &str, display_price: &str) -> MenuDish {
        MenuDish {
            name: DishName::parse(name).unwrap(),
            display_price: display_price.to_owned(),
            image: ImageUrl::placeholder(),
        }
    }

    async fn controller(
        dishes: Vec<MenuDish>,
        policy: PricePolicy,
    ) -> (UiController, Arc<Mutex<Recorded>>) {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let manager = CartManager::initialize(Arc::new(MemoryStore::new())).await;
        let controller = UiController::new(
            manager,
            Box::new(RecordingCartSurface(Arc::clone(&recorded))),
            dishes,
            Box::new(RecordingMenuSurface(Arc::clone(&recorded))),
            Box::new(RecordingNavSurface(Arc::clone(&recorded))),
            policy,
        );
        (controller, recorded)
    }

    #[tokio::test]
    async fn test_initial_render_of_both_views() {
        let (_controller, recorded) = controller(vec![dish("Pizza", "250 ₽")], PricePolicy::Coerce).await;
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.cart_renders.len(), 1);
        assert_eq!(recorded.menu_renders.len(), 1);
        assert_eq!(
            recorded.cart_renders.first().unwrap().placeholder,
            Some(crate::ui::views::EMPTY_CART_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_add_fans_out_to_both_views() {
        let (mut controller, recorded) =
            controller(vec![dish("Pizza", "250 ₽")], PricePolicy::Coerce).await;

        controller
            .handle(UiEvent::AddToCart {
                name: DishName::parse("Pizza").unwrap(),
                qty: 2,
            })
            .await
            .unwrap();

        let recorded = recorded.lock().unwrap();
        // initial render plus one per mutation
        assert_eq!(recorded.cart_renders.len(), 2);
        assert_eq!(recorded.menu_renders.len(), 2);

        let last_menu = recorded.menu_renders.last().unwrap();
        assert_eq!(
            last_menu.first().unwrap().widget,
            CardWidget::QuantityStepper(2)
        );
        let last_cart = recorded.cart_renders.last().unwrap();
        assert_eq!(last_cart.total_items, "2 pcs");
        assert_eq!(last_cart.total_price, "500.00 ₽");
    }

    #[tokio::test]
    async fn test_clear_from_cart_page_resets_menu_widgets() {
        let (mut controller, recorded) =
            controller(vec![dish("Pizza", "250 ₽")], PricePolicy::Coerce).await;
        let pizza = DishName::parse("Pizza").unwrap();

        controller
            .handle(UiEvent::AddToCart {
                name: pizza.clone(),
                qty: 1,
            })
            .await
            .unwrap();
        controller.handle(UiEvent::ClearCart).await.unwrap();

        let recorded = recorded.lock().unwrap();
        let last_menu = recorded.menu_renders.last().unwrap();
        assert_eq!(last_menu.first().unwrap().widget, CardWidget::AddButton);
        assert!(recorded.cart_renders.last().unwrap().placeholder.is_some());
    }

    #[tokio::test]
    async fn test_malformed_price_coerces_to_zero() {
        let (mut controller, _recorded) =
            controller(vec![dish("Mystery", "n/a")], PricePolicy::Coerce).await;

        controller
            .handle(UiEvent::AddToCart {
                name: DishName::parse("Mystery").unwrap(),
                qty: 1,
            })
            .await
            .unwrap();

        let summary = controller.manager().summary();
        assert_eq!(summary.total_items, 1);
        assert!(summary.total_price.is_zero());
    }

    #[tokio::test]
    async fn test_malformed_price_rejected_under_reject_policy() {
        let (mut controller, _recorded) =
            controller(vec![dish("Mystery", "n/a")], PricePolicy::Reject).await;

        let result = controller
            .handle(UiEvent::AddToCart {
                name: DishName::parse("Mystery").unwrap(),
                qty: 1,
            })
            .await;

        assert!(result.is_err());
        assert!(controller.manager().cart().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_dish_is_a_noop() {
        let (mut controller, recorded) = controller(Vec::new(), PricePolicy::Coerce).await;

        controller
            .handle(UiEvent::AddToCart {
                name: DishName::parse("Ghost").unwrap(),
                qty: 1,
            })
            .await
            .unwrap();

        assert!(controller.manager().cart().is_empty());
        // no mutation, so only the initial renders exist
        assert_eq!(recorded.lock().unwrap().cart_renders.len(), 1);
    }

    #[tokio::test]
    async fn test_navigation_events() {
        let (mut controller, recorded) = controller(Vec::new(), PricePolicy::Coerce).await;

        controller.handle(UiEvent::ShowCart).await.unwrap();
        assert_eq!(controller.route(), Route::Cart);
        controller.handle(UiEvent::ShowMenu).await.unwrap();
        assert_eq!(controller.route(), Route::Menu);

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.routes, vec![Route::Cart, Route::Menu]);
    }
}
