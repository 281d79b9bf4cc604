//! Vitrine Storefront - demo walk-through.
//!
//! Seeds an in-memory catalog and drives the interaction layer through a
//! scripted session: browsing the home grid, filling a cart, hitting stock
//! limits, a checkout blocked on login, then a successful order. Every
//! surface the UI would render (toasts, effects, views) is logged instead.
//!
//! Configuration comes from `VITRINE_*` environment variables (see
//! [`vitrine_storefront::config`]); a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Instant;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::{CurrencyCode, Email, Price, ProductId, Role, SessionId, UserId};
use vitrine_storefront::auth::{AuthProvider, MemoryAuth};
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::models::{CurrentUser, Product, Session};
use vitrine_storefront::state::AppState;
use vitrine_storefront::store::{CatalogStore, MemoryStore};
use vitrine_storefront::ui::{
    ChromeState, Effect, HomeView, ProfileAction, ProfileMenuView, ToastStack,
};
use vitrine_storefront::ui::effect::{checkout_effect, error_effect};

fn seed_catalog() -> Vec<Product> {
    let product = |id: i32, name: &str, cents: i64, stock: u32| Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD).expect("seed prices are valid"),
        image: format!("products/{id}.webp"),
        stock,
        active: true,
    };
    vec![
        product(1, "Mechanical Keyboard", 12990, 3),
        product(2, "Wireless Mouse", 4990, 12),
        product(3, "USB-C Hub", 6990, 0),
        product(4, "Laptop Stand", 3990, 4),
        product(5, "Webcam", 8990, 20),
        product(6, "Desk Mat", 2490, 9),
    ]
}

fn log_effect(effect: &Effect) {
    let Effect::Redirect { page, after } = effect;
    tracing::info!(path = %page.path(), after_ms = after.as_millis(), "redirect scheduled");
}

#[allow(clippy::too_many_lines)]
fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let store = MemoryStore::with_products(seed_catalog());
    let auth = MemoryAuth::new();
    let state = AppState::new(config, store, auth);

    let mut toasts = ToastStack::new(
        state.config().max_visible_toasts,
        state.config().toast_ttl,
    );
    let mut chrome = ChromeState::new();

    // Home grid.
    let home = HomeView::from_catalog(&state.store().products(), state.config());
    tracing::info!(
        featured = home.featured.len(),
        for_you = home.for_you.len(),
        "home grid built"
    );
    for card in home.featured.iter().chain(&home.for_you) {
        tracing::info!(name = %card.name, price = %card.price, badge = ?card.badge, "card");
    }

    // The anonymous profile menu shows a login prompt.
    chrome.toggle_profile();
    tracing::info!(menu = ?ProfileMenuView::for_user(state.auth().current_user().as_ref()), "profile menu");
    chrome.outside_click();

    // Fill the cart: keyboard twice, then try to jump past its stock.
    let cart = state.cart();
    let keyboard = ProductId::new(1);
    for _ in 0..2 {
        match cart.add_item(keyboard) {
            Ok(line) => toasts.push("Success", format!("{} added!", line.name), Instant::now()),
            Err(err) => {
                let (title, body) = err.user_message();
                toasts.push(title, body, Instant::now());
            }
        }
    }
    if let Err(err) = cart.update_quantity(keyboard, 99) {
        let (title, body) = err.user_message();
        toasts.push(title, body, Instant::now());
        tracing::warn!(%err, "quantity rejected");
    }

    // Checkout while anonymous: blocked, with a delayed login redirect.
    if let Err(err) = cart.checkout() {
        let (title, body) = err.user_message();
        toasts.push(title, body, Instant::now());
        if let Some(effect) = error_effect(&err, state.config()) {
            log_effect(&effect);
        }
    }

    // Sign in and retry.
    state.auth().sign_in(CurrentUser {
        name: "Ana".to_owned(),
        email: Email::parse("ana@example.com").expect("valid seed email"),
        role: Role::Customer,
    });
    state.store().open_session(Session {
        id: SessionId::generate(),
        user_id: UserId::new(1),
    });

    match cart.checkout() {
        Ok(order) => {
            let receipt = serde_json::to_string_pretty(&order).expect("order serializes");
            tracing::info!(order_id = %order.id, %receipt, "order placed");
            toasts.push(
                "Success",
                format!("Order #{} placed! Total: ${:.2}", order.id, order.total),
                Instant::now(),
            );
            log_effect(&checkout_effect(order.id, state.config()));
        }
        Err(err) => tracing::error!(%err, "checkout failed"),
    }

    // Signed-in profile menu, then logout through the dispatcher.
    chrome.toggle_profile();
    tracing::info!(menu = ?ProfileMenuView::for_user(state.auth().current_user().as_ref()), "profile menu");
    if let Some(effect) = chrome.dispatch_profile(ProfileAction::Logout, state.auth()) {
        log_effect(&effect);
    }

    for toast in toasts.visible() {
        tracing::info!(title = %toast.title, body = %toast.body, "toast");
    }
    tracing::info!(count = state.cart().item_count(), "cart after checkout");
}
