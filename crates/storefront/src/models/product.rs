//! Product domain type.

use serde::{Deserialize, Serialize};

use vitrine_core::{Price, ProductId};

/// A purchasable product in the catalog.
///
/// Stock is the single source of truth for availability and is mutated only
/// through the store's decrement/restore operations, never directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (path or URL).
    pub image: String,
    /// Units currently in stock.
    pub stock: u32,
    /// Inactive products never appear on the storefront.
    pub active: bool,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.active && self.stock > 0
    }
}
