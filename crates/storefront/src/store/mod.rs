//! Catalog/Cart Store collaborator contract.
//!
//! The storefront treats the store as a black box: products, cart lines,
//! orders and the current session live behind the [`CatalogStore`] trait.
//! The store is synchronous and in-process, and it - not the UI - is the
//! authority on stock: every cart mutation is re-validated here even when
//! callers already checked locally.

mod memory;

pub use memory::MemoryStore;

use rust_decimal::Decimal;
use thiserror::Error;

use vitrine_core::{ProductId, Quantity};

use crate::models::{CartLine, Order, Product, Session};

/// Rejections produced by the store.
///
/// These carry the human-readable detail that gets surfaced to the shopper,
/// so messages are written for people, not logs.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No product with this ID exists.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The product has zero stock.
    #[error("{name} is sold out")]
    OutOfStock {
        /// Product display name.
        name: String,
    },

    /// The requested quantity exceeds what is in stock.
    #[error("only {available} of {name} in stock (requested {requested})")]
    InsufficientStock {
        /// Product display name.
        name: String,
        /// Quantity the shopper asked for.
        requested: u32,
        /// Units actually available.
        available: u32,
    },

    /// The referenced cart line does not exist.
    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over products, cart lines, orders and the current
/// session, with built-in stock enforcement.
pub trait CatalogStore {
    /// All products, in catalog order.
    fn products(&self) -> Vec<Product>;

    /// Look up a single product.
    fn product_by_id(&self, id: ProductId) -> Option<Product>;

    /// Add `quantity` units of a product to the cart.
    ///
    /// Re-validates stock and either merges into an existing line
    /// (incrementing its quantity) or creates a new one. Returns the line
    /// as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`], [`StoreError::OutOfStock`], or
    /// [`StoreError::InsufficientStock`] if the merged quantity would
    /// exceed current stock.
    fn add_to_cart(&self, id: ProductId, quantity: Quantity) -> StoreResult<CartLine>;

    /// Current cart lines, in insertion order.
    fn cart(&self) -> Vec<CartLine>;

    /// Set a cart line's quantity to exactly `quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LineNotFound`] if the line is absent,
    /// [`StoreError::NotFound`] if its product vanished, or
    /// [`StoreError::InsufficientStock`] if `quantity` exceeds stock.
    fn update_cart_quantity(&self, id: ProductId, quantity: Quantity) -> StoreResult<CartLine>;

    /// Remove a line from the cart. A no-op if the line is absent.
    fn remove_from_cart(&self, id: ProductId);

    /// Remove every line from the cart.
    fn clear_cart(&self);

    /// Total number of units across all cart lines.
    fn cart_item_count(&self) -> u32;

    /// Sum of price times quantity over all cart lines.
    fn cart_total(&self) -> Decimal;

    /// Decrement a product's stock by `quantity` units.
    ///
    /// Returns `false` (leaving stock untouched) if the product is missing
    /// or has fewer than `quantity` units.
    fn decrease_stock(&self, id: ProductId, quantity: u32) -> bool;

    /// Return `quantity` units to a product's stock.
    ///
    /// Used to compensate already-applied decrements when a checkout is
    /// aborted partway. A no-op if the product is missing.
    fn restore_stock(&self, id: ProductId, quantity: u32);

    /// Record an order for the given lines and total.
    fn create_order(&self, lines: Vec<CartLine>, total: Decimal) -> Order;

    /// The current session, if a shopper is signed in.
    fn current_session(&self) -> Option<Session>;
}
