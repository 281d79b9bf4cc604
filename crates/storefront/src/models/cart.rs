//! Cart line domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vitrine_core::{Price, ProductId, Quantity};

use super::product::Product;

/// One product-quantity pairing held by a shopper before checkout.
///
/// Carries a denormalized snapshot of name/price/image for display so the
/// cart renders without re-fetching the catalog. Invariant: the quantity
/// never exceeds the product's stock at the moment of mutation - enforced
/// by the store, not by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Snapshot of the product name at add time.
    pub name: String,
    /// Snapshot of the unit price at add time.
    pub price: Price,
    /// Snapshot of the image reference at add time.
    pub image: String,
    /// How many units the shopper wants. At least 1.
    pub quantity: Quantity,
}

impl CartLine {
    /// A fresh line for one unit of `product`.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: Quantity::ONE,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity.get())
    }
}
