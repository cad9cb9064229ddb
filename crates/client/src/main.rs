//! Bistro ordering client - interactive terminal shell.
//!
//! Drives the same components the ordering page uses: the cart manager
//! over a JSON file store (or in-memory when no path is configured), the
//! cart page and menu board views, and route navigation. Useful for
//! poking at cart behavior without a browser.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary is a terminal shell; the terminal is its render surface.
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use bistro_client::cart::CartManager;
use bistro_client::config::ClientConfig;
use bistro_client::storage::{CartStore, JsonFileStore, MemoryStore};
use bistro_client::ui::{
    CardWidget, CartPageSurface, CartPageView, MenuCardView, MenuDish, MenuSurface,
    NavigationSurface, Route, UiController, UiEvent,
};
use bistro_core::{DishName, ImageUrl};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Renders the cart page as plain text.
struct TerminalCartPage;

impl CartPageSurface for TerminalCartPage {
    fn render(&mut self, view: &CartPageView) {
        println!("--- Your Order ---");
        if let Some(placeholder) = view.placeholder {
            println!("{placeholder}");
        }
        for item in &view.items {
            println!(
                "{:<30} x{:<3} {:>12} (unit {})",
                item.name, item.quantity, item.line_total, item.unit_price
            );
        }
        println!("{} | total {}", view.total_items, view.total_price);
    }
}

/// Renders the menu board widget states as plain text.
struct TerminalMenuBoard;

impl MenuSurface for TerminalMenuBoard {
    fn render(&mut self, cards: &[MenuCardView]) {
        println!("--- Menu ---");
        for card in cards {
            match card.widget {
                CardWidget::AddButton => println!("{:<30} [add to cart]", card.name.as_str()),
                CardWidget::QuantityStepper(qty) => {
                    println!("{:<30} [- {qty} +]", card.name.as_str());
                }
            }
        }
    }
}

/// Prints navigation as a location change.
struct TerminalNavigation;

impl NavigationSurface for TerminalNavigation {
    fn navigate(&mut self, route: Route) {
        println!(">> {}", route.path());
    }
}

/// A small fixed menu for the shell.
fn demo_menu() -> Vec<MenuDish> {
    [
        ("Borscht", "310 ₽"),
        ("Pelmeni", "420 ₽"),
        ("Beef Stroganoff", "560 ₽"),
        ("Blini", "250 ₽"),
    ]
    .into_iter()
    .filter_map(|(name, price)| {
        Some(MenuDish {
            name: DishName::parse(name).ok()?,
            display_price: price.to_owned(),
            image: ImageUrl::placeholder(),
        })
    })
    .collect()
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bistro_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().expect("Failed to load configuration");

    // Open the configured store, degrading to in-memory when unusable.
    let store: Arc<dyn CartStore> = match &config.storage_path {
        Some(path) => match JsonFileStore::open(path.clone()).await {
            Ok(store) => {
                tracing::info!(path = %path.display(), "cart file store opened");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("storage unavailable ({e}), cart will not persist");
                Arc::new(MemoryStore::new())
            }
        },
        None => {
            tracing::info!("no storage path configured, cart will not persist");
            Arc::new(MemoryStore::new())
        }
    };

    // The single suspension point: load the cart before wiring any UI.
    let manager = CartManager::initialize(store).await;

    let mut controller = UiController::new(
        manager,
        Box::new(TerminalCartPage),
        demo_menu(),
        Box::new(TerminalMenuBoard),
        Box::new(TerminalNavigation),
        config.price_policy,
    );

    println!("commands: menu | cart | add <dish> [qty] | inc <dish> | dec <dish> | rm <dish> | clear | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let event = match command {
            "menu" => Some(UiEvent::ShowMenu),
            "cart" => Some(UiEvent::ShowCart),
            "add" => parse_dish_and_qty(rest).map(|(name, qty)| UiEvent::AddToCart { name, qty }),
            "inc" => parse_dish(rest).map(UiEvent::Increase),
            "dec" => parse_dish(rest).map(UiEvent::Decrease),
            "rm" => parse_dish(rest).map(UiEvent::Remove),
            "clear" => Some(UiEvent::ClearCart),
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                None
            }
        };

        if let Some(event) = event
            && let Err(e) = controller.handle(event).await
        {
            println!("error: {e}");
        }
    }

    tracing::info!("bye");
}

fn parse_dish(input: &str) -> Option<DishName> {
    match DishName::parse(input) {
        Ok(name) => Some(name),
        Err(e) => {
            println!("error: {e}");
            None
        }
    }
}

fn parse_dish_and_qty(input: &str) -> Option<(DishName, u32)> {
    let (name, qty) = match input.rsplit_once(' ') {
        Some((name, qty_str)) if qty_str.parse::<u32>().is_ok() => {
            (name, qty_str.parse().unwrap_or(1))
        }
        _ => (input, 1),
    };
    parse_dish(name).map(|name| (name, qty))
}
