//! Order domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vitrine_core::OrderId;

use super::cart::CartLine;

/// A completed order.
///
/// Created at checkout from the cart lines of the moment; immutable once
/// created. The ID is used for confirmation and post-checkout navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Snapshot of the cart lines that made up this order.
    pub lines: Vec<CartLine>,
    /// Sum of price times quantity over all lines.
    pub total: Decimal,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}
