//! View models for the product grid and cart.
//!
//! Plain data built from domain types; the host shell renders them. Prices
//! arrive pre-formatted so no template ever touches a `Decimal`.

use rust_decimal::Decimal;

use vitrine_core::{CurrencyCode, ProductId};

use crate::config::StorefrontConfig;
use crate::models::{CartLine, Product};

/// Availability badge on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    /// Zero stock; the card is not purchasable.
    Out,
    /// Stock at or below the low-stock threshold.
    Low {
        /// Units remaining.
        remaining: u32,
    },
    /// Plenty of stock.
    Normal {
        /// Units in stock.
        stock: u32,
    },
}

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub badge: StockBadge,
    /// Whether the buy button is enabled.
    pub purchasable: bool,
}

impl ProductCardView {
    /// Build a card for one product.
    #[must_use]
    pub fn for_product(product: &Product, low_stock_threshold: u32) -> Self {
        let badge = if product.stock == 0 {
            StockBadge::Out
        } else if product.stock <= low_stock_threshold {
            StockBadge::Low {
                remaining: product.stock,
            }
        } else {
            StockBadge::Normal {
                stock: product.stock,
            }
        };
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            badge,
            purchasable: product.is_purchasable(),
        }
    }
}

/// Home page display data: two product sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// First section of active products.
    pub featured: Vec<ProductCardView>,
    /// Second section of active products.
    pub for_you: Vec<ProductCardView>,
}

impl HomeView {
    /// Build the home sections from the catalog.
    ///
    /// Inactive products never appear. The first `featured_count` active
    /// products are featured, the next `featured_count` fill "for you".
    #[must_use]
    pub fn from_catalog(products: &[Product], config: &StorefrontConfig) -> Self {
        let cards: Vec<ProductCardView> = products
            .iter()
            .filter(|p| p.active)
            .map(|p| ProductCardView::for_product(p, config.low_stock_threshold))
            .collect();

        let mut sections = cards.chunks(config.featured_count.max(1));
        Self {
            featured: sections.next().unwrap_or_default().to_vec(),
            for_you: sections.next().unwrap_or_default().to_vec(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            image: line.image.clone(),
            unit_price: line.price.display(),
            quantity: line.quantity.get(),
            line_total: format_amount(line.line_total(), line.price.currency_code()),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    /// Count badge value; `None` hides the badge.
    pub count_badge: Option<u32>,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_amount(Decimal::ZERO, CurrencyCode::default()),
            count_badge: None,
        }
    }

    /// Build the view from cart lines and the precomputed totals.
    #[must_use]
    pub fn from_lines(lines: &[CartLine], total: Decimal, item_count: u32) -> Self {
        let currency = lines
            .first()
            .map_or_else(CurrencyCode::default, |line| line.price.currency_code());
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: format_amount(total, currency),
            count_badge: (item_count > 0).then_some(item_count),
        }
    }
}

/// Format a decimal amount with a currency symbol (e.g. "$25.00").
fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    format!("{}{amount:.2}", currency.symbol())
}
