//! Cart reconciliation service.
//!
//! Maintains the shopping cart as a view over a catalog with finite stock,
//! enforcing stock constraints on every mutation and computing derived
//! totals. The store stays authoritative: local checks exist only for
//! immediate feedback, and every mutation is re-validated store-side.

use rust_decimal::Decimal;
use tracing::instrument;

use vitrine_core::{ProductId, Quantity};

use crate::error::{Result, StorefrontError};
use crate::models::{CartLine, Order};
use crate::store::CatalogStore;

/// Stock-aware cart/checkout reconciler.
///
/// Borrows the store for the duration of an interaction, mirroring the
/// event-driven shape of the UI: every operation runs to completion on a
/// single user-triggered event.
pub struct CartReconciler<'a, S> {
    store: &'a S,
}

impl<'a, S: CatalogStore> CartReconciler<'a, S> {
    /// Create a reconciler over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Add one unit of a product to the cart.
    ///
    /// Checks stock locally for immediate feedback, then delegates to the
    /// store, which re-validates and either merges into an existing line or
    /// creates a new one. Returns the line as stored.
    ///
    /// # Errors
    ///
    /// `NotFound` if the product is absent, `OutOfStock` if its stock is
    /// zero, `InsufficientStock` if the store rejects the merged quantity.
    #[instrument(skip(self))]
    pub fn add_item(&self, id: ProductId) -> Result<CartLine> {
        let product = self
            .store
            .product_by_id(id)
            .ok_or(StorefrontError::NotFound(id))?;

        // Local fast-path; the store re-checks authoritatively.
        if product.stock == 0 {
            return Err(StorefrontError::OutOfStock { name: product.name });
        }

        let line = self.store.add_to_cart(id, Quantity::ONE)?;
        tracing::info!(product = %line.name, quantity = line.quantity.get(), "added to cart");
        Ok(line)
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` for values below 1 (callers must use
    /// [`Self::remove`] instead); store-side errors for absent lines or
    /// quantities beyond stock.
    #[instrument(skip(self))]
    pub fn update_quantity(&self, id: ProductId, quantity: u32) -> Result<CartLine> {
        let quantity = Quantity::new(quantity).map_err(|_| StorefrontError::InvalidQuantity)?;
        let line = self.store.update_cart_quantity(id, quantity)?;
        tracing::info!(product = %line.name, quantity = line.quantity.get(), "quantity updated");
        Ok(line)
    }

    /// Remove a line from the cart. Always succeeds.
    #[instrument(skip(self))]
    pub fn remove(&self, id: ProductId) {
        self.store.remove_from_cart(id);
        tracing::info!(product_id = %id, "removed from cart");
    }

    /// Empty the cart. Always succeeds.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.store.clear_cart();
        tracing::info!("cart cleared");
    }

    /// Current cart lines.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.store.cart()
    }

    /// Total units across all lines, for the count badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.store.cart_item_count()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.store.cart_total()
    }

    /// Turn the cart into an order.
    ///
    /// Attempts the stock decrement for *every* line, collecting failures
    /// per line instead of aborting at the first. Any failure aborts the
    /// order: already-applied decrements are compensated and the cart is
    /// left intact so the shopper can adjust it. On success the order is
    /// recorded and the cart cleared.
    ///
    /// # Errors
    ///
    /// `EmptyCart` without lines, `AuthRequired` without a session, and
    /// `Checkout` carrying the accumulated per-line messages.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> Result<Order> {
        let lines = self.store.cart();
        if lines.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        if self.store.current_session().is_none() {
            return Err(StorefrontError::AuthRequired);
        }

        let mut applied: Vec<(ProductId, u32)> = Vec::new();
        let mut failures: Vec<String> = Vec::new();
        for line in &lines {
            let quantity = line.quantity.get();
            if self.store.decrease_stock(line.product_id, quantity) {
                applied.push((line.product_id, quantity));
            } else {
                failures.push(format!("Insufficient stock for {}.", line.name));
            }
        }

        if !failures.is_empty() {
            for (id, quantity) in applied {
                self.store.restore_stock(id, quantity);
            }
            tracing::warn!(failed_lines = failures.len(), "checkout aborted");
            return Err(StorefrontError::Checkout(failures));
        }

        let total = self.store.cart_total();
        let order = self.store.create_order(lines, total);
        self.store.clear_cart();
        tracing::info!(order_id = %order.id, total = %order.total, "order placed");
        Ok(order)
    }
}
