//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! Everything runs in-process against [`MemoryStore`] and [`MemoryAuth`];
//! no external services are involved.
//!
//! # Test Categories
//!
//! - `cart_checkout` - cart reconciliation and checkout scenarios
//! - `ui_chrome` - toast stack, dropdowns, and profile menu flows

#![cfg_attr(not(test), forbid(unsafe_code))]

use vitrine_core::{CurrencyCode, Email, Price, ProductId, Role, SessionId, UserId};
use vitrine_storefront::auth::MemoryAuth;
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::models::{CurrentUser, Product, Session};
use vitrine_storefront::state::AppState;
use vitrine_storefront::store::MemoryStore;

/// Shared state type for the scenario tests.
pub type TestState = AppState<MemoryStore, MemoryAuth>;

/// A test product with the given ID, stock and price (in cents).
#[must_use]
pub fn product(id: i32, stock: u32, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Price::from_cents(price_cents, CurrencyCode::USD).expect("test price is valid"),
        image: format!("products/{id}.webp"),
        stock,
        active: true,
    }
}

/// Application state over a seeded in-memory store, nobody signed in.
#[must_use]
pub fn test_state(products: Vec<Product>) -> TestState {
    AppState::new(
        StorefrontConfig::default(),
        MemoryStore::with_products(products),
        MemoryAuth::new(),
    )
}

/// Sign a customer in on both collaborators, the way a login surface would.
pub fn sign_in(state: &TestState) {
    state.auth().sign_in(CurrentUser {
        name: "Ana".to_owned(),
        email: Email::parse("ana@example.com").expect("test email is valid"),
        role: Role::Customer,
    });
    state.store().open_session(Session {
        id: SessionId::generate(),
        user_id: UserId::new(1),
    });
}
