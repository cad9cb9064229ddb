//! End-to-end cart flows through the controller with both views attached.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use bistro_client::cart::CartManager;
use bistro_client::storage::MemoryStore;
use bistro_client::ui::{
    CardWidget, CartPageSurface, CartPageView, MenuCardView, MenuDish, MenuSurface,
    NavigationSurface, Route, UiController, UiEvent,
};
use bistro_core::{DishName, ImageUrl, PricePolicy};

#[derive(Default)]
struct Screen {
    cart: Option<CartPageView>,
    menu: Vec<MenuCardView>,
    route: Option<Route>,
}

struct CartTarget(Arc<Mutex<Screen>>);
struct MenuTarget(Arc<Mutex<Screen>>);
struct NavTarget(Arc<Mutex<Screen>>);

impl CartPageSurface for CartTarget {
    fn render(&mut self, view: &CartPageView) {
        self.0.lock().unwrap().cart = Some(view.clone());
    }
}

impl MenuSurface for MenuTarget {
    fn render(&mut self, cards: &[MenuCardView]) {
        self.0.lock().unwrap().menu = cards.to_vec();
    }
}

impl NavigationSurface for NavTarget {
    fn navigate(&mut self, route: Route) {
        self.0.lock().unwrap().route = Some(route);
    }
}

fn dish(name: &str) -> DishName {
    DishName::parse(name).unwrap()
}

fn menu() -> Vec<MenuDish> {
    [("Pizza", "10.50"), ("Borscht", "310 ₽")]
        .into_iter()
        .map(|(name, price)| MenuDish {
            name: dish(name),
            display_price: price.to_owned(),
            image: ImageUrl::placeholder(),
        })
        .collect()
}

async fn setup() -> (UiController, Arc<Mutex<Screen>>) {
    let screen = Arc::new(Mutex::new(Screen::default()));
    let manager = CartManager::initialize(Arc::new(MemoryStore::new())).await;
    let controller = UiController::new(
        manager,
        Box::new(CartTarget(Arc::clone(&screen))),
        menu(),
        Box::new(MenuTarget(Arc::clone(&screen))),
        Box::new(NavTarget(Arc::clone(&screen))),
        PricePolicy::Coerce,
    );
    (controller, screen)
}

#[tokio::test]
async fn ordering_flow_keeps_both_views_consistent() {
    let (mut controller, screen) = setup().await;

    controller
        .handle(UiEvent::AddToCart {
            name: dish("Pizza"),
            qty: 2,
        })
        .await
        .unwrap();
    controller.handle(UiEvent::Increase(dish("Pizza"))).await.unwrap();
    controller
        .handle(UiEvent::AddToCart {
            name: dish("Borscht"),
            qty: 1,
        })
        .await
        .unwrap();

    {
        let screen = screen.lock().unwrap();
        let cart = screen.cart.as_ref().unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total_items, "4 pcs");
        assert_eq!(cart.total_price, "341.50 ₽");

        assert_eq!(screen.menu[0].widget, CardWidget::QuantityStepper(3));
        assert_eq!(screen.menu[1].widget, CardWidget::QuantityStepper(1));
    }

    // stepping Pizza down to zero removes it and restores the add button
    for _ in 0..3 {
        controller.handle(UiEvent::Decrease(dish("Pizza"))).await.unwrap();
    }

    let screen = screen.lock().unwrap();
    let cart = screen.cart.as_ref().unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].name, "Borscht");
    assert_eq!(screen.menu[0].widget, CardWidget::AddButton);
}

#[tokio::test]
async fn spec_scenario_pizza_summary() {
    let (mut controller, screen) = setup().await;

    controller
        .handle(UiEvent::AddToCart {
            name: dish("Pizza"),
            qty: 2,
        })
        .await
        .unwrap();

    let summary = controller.manager().summary();
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.total_price, "21.00".parse().unwrap());

    controller.handle(UiEvent::Remove(dish("Pizza"))).await.unwrap();

    let summary = controller.manager().summary();
    assert_eq!(summary.total_items, 0);
    assert!(summary.total_price.is_zero());

    let screen = screen.lock().unwrap();
    assert!(screen.cart.as_ref().unwrap().placeholder.is_some());
}

#[tokio::test]
async fn remove_all_empties_cart_and_menu_widgets() {
    let (mut controller, screen) = setup().await;

    for name in ["Pizza", "Borscht"] {
        controller
            .handle(UiEvent::AddToCart {
                name: dish(name),
                qty: 2,
            })
            .await
            .unwrap();
    }
    controller.handle(UiEvent::ClearCart).await.unwrap();

    let screen = screen.lock().unwrap();
    let cart = screen.cart.as_ref().unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.total_items, "0 pcs");
    assert_eq!(cart.total_price, "0.00 ₽");
    assert!(screen.menu.iter().all(|c| c.widget == CardWidget::AddButton));
}

#[tokio::test]
async fn navigation_between_fixed_routes() {
    let (mut controller, screen) = setup().await;

    controller.handle(UiEvent::ShowCart).await.unwrap();
    assert_eq!(screen.lock().unwrap().route, Some(Route::Cart));
    assert_eq!(Route::Cart.path(), "/cart");

    controller.handle(UiEvent::ShowMenu).await.unwrap();
    assert_eq!(screen.lock().unwrap().route, Some(Route::Menu));
    assert_eq!(Route::Menu.path(), "/menu");
}
