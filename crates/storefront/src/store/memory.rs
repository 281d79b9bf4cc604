//! In-memory reference implementation of [`CatalogStore`].
//!
//! Useful for tests and the demo binary, and the authority on the stock
//! invariants the trait promises. Interior mutability gives a cheap,
//! cloneable handle; there is no parallelism in the storefront, the lock
//! only satisfies the shared-handle shape.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;

use vitrine_core::{OrderId, ProductId, Quantity};

use crate::models::{CartLine, Order, Product, Session};

use super::{CatalogStore, StoreError, StoreResult};

/// In-memory catalog, cart, order and session state.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    products: Vec<Product>,
    cart: Vec<CartLine>,
    orders: Vec<Order>,
    next_order_id: i32,
    session: Option<Session>,
}

impl MemoryStore {
    /// Create a store seeded with the given catalog.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products,
                cart: Vec::new(),
                orders: Vec::new(),
                next_order_id: 1,
                session: None,
            })),
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Begin a session for a signed-in shopper.
    pub fn open_session(&self, session: Session) {
        self.write().session = Some(session);
    }

    /// End the current session, if any.
    pub fn close_session(&self) {
        self.write().session = None;
    }

    /// All orders placed so far, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read().orders.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("RwLock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("RwLock poisoned")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn product(&self, id: ProductId) -> StoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Reject quantities that exceed current stock.
    fn check_stock(product: &Product, requested: u32) -> StoreResult<()> {
        if product.stock == 0 {
            return Err(StoreError::OutOfStock {
                name: product.name.clone(),
            });
        }
        if requested > product.stock {
            return Err(StoreError::InsufficientStock {
                name: product.name.clone(),
                requested,
                available: product.stock,
            });
        }
        Ok(())
    }
}

impl CatalogStore for MemoryStore {
    fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    fn add_to_cart(&self, id: ProductId, quantity: Quantity) -> StoreResult<CartLine> {
        let mut inner = self.write();
        let product = inner.product(id)?.clone();

        let merged = inner
            .cart
            .iter()
            .find(|line| line.product_id == id)
            .map_or(quantity.get(), |line| {
                line.quantity.saturating_add(quantity.get()).get()
            });
        Inner::check_stock(&product, merged)?;

        if let Some(line) = inner.cart.iter_mut().find(|line| line.product_id == id) {
            line.quantity = line.quantity.saturating_add(quantity.get());
            return Ok(line.clone());
        }

        let mut line = CartLine::for_product(&product);
        line.quantity = quantity;
        inner.cart.push(line.clone());
        Ok(line)
    }

    fn cart(&self) -> Vec<CartLine> {
        self.read().cart.clone()
    }

    fn update_cart_quantity(&self, id: ProductId, quantity: Quantity) -> StoreResult<CartLine> {
        let mut inner = self.write();

        if !inner.cart.iter().any(|line| line.product_id == id) {
            return Err(StoreError::LineNotFound(id));
        }
        let product = inner.product(id)?.clone();
        Inner::check_stock(&product, quantity.get())?;

        let line = inner
            .cart
            .iter_mut()
            .find(|line| line.product_id == id)
            .ok_or(StoreError::LineNotFound(id))?;
        line.quantity = quantity;
        Ok(line.clone())
    }

    fn remove_from_cart(&self, id: ProductId) {
        self.write().cart.retain(|line| line.product_id != id);
    }

    fn clear_cart(&self) {
        self.write().cart.clear();
    }

    fn cart_item_count(&self) -> u32 {
        self.read()
            .cart
            .iter()
            .map(|line| line.quantity.get())
            .sum()
    }

    fn cart_total(&self) -> Decimal {
        self.read().cart.iter().map(CartLine::line_total).sum()
    }

    fn decrease_stock(&self, id: ProductId, quantity: u32) -> bool {
        let mut inner = self.write();
        let Some(product) = inner.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if product.stock < quantity {
            return false;
        }
        product.stock -= quantity;
        true
    }

    fn restore_stock(&self, id: ProductId, quantity: u32) {
        let mut inner = self.write();
        if let Some(product) = inner.products.iter_mut().find(|p| p.id == id) {
            product.stock = product.stock.saturating_add(quantity);
        }
    }

    fn create_order(&self, lines: Vec<CartLine>, total: Decimal) -> Order {
        let mut inner = self.write();
        let order = Order {
            id: OrderId::new(inner.next_order_id),
            lines,
            total,
            created_at: Utc::now(),
        };
        inner.next_order_id += 1;
        inner.orders.push(order.clone());
        order
    }

    fn current_session(&self) -> Option<Session> {
        self.read().session.clone()
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::{CurrencyCode, Price, SessionId, UserId};

    use super::*;

    fn product(id: i32, stock: u32, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(price_cents, CurrencyCode::USD).expect("valid"),
            image: format!("products/{id}.webp"),
            stock,
            active: true,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::with_products(vec![product(1, 3, 1000), product(2, 0, 500)])
    }

    #[test]
    fn test_add_merges_into_existing_line() {
        let store = store();
        let id = ProductId::new(1);

        store.add_to_cart(id, Quantity::ONE).expect("first add");
        let line = store.add_to_cart(id, Quantity::ONE).expect("second add");

        assert_eq!(line.quantity.get(), 2);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart_item_count(), 2);
    }

    #[test]
    fn test_add_rejects_sold_out_product() {
        let store = store();
        let err = store
            .add_to_cart(ProductId::new(2), Quantity::ONE)
            .expect_err("sold out");
        assert!(matches!(err, StoreError::OutOfStock { .. }));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_rejects_merge_beyond_stock() {
        let store = store();
        let id = ProductId::new(1);
        let three = Quantity::new(3).expect("valid");

        store.add_to_cart(id, three).expect("fills the stock");
        let err = store.add_to_cart(id, Quantity::ONE).expect_err("over stock");

        assert!(matches!(
            err,
            StoreError::InsufficientStock {
                requested: 4,
                available: 3,
                ..
            }
        ));
        // The line is unchanged.
        assert_eq!(store.cart_item_count(), 3);
    }

    #[test]
    fn test_update_quantity_validates_stock() {
        let store = store();
        let id = ProductId::new(1);
        store.add_to_cart(id, Quantity::ONE).expect("add");

        let err = store
            .update_cart_quantity(id, Quantity::new(5).expect("valid"))
            .expect_err("beyond stock");
        assert!(matches!(err, StoreError::InsufficientStock { .. }));

        let line = store
            .update_cart_quantity(id, Quantity::new(3).expect("valid"))
            .expect("within stock");
        assert_eq!(line.quantity.get(), 3);
    }

    #[test]
    fn test_update_missing_line_fails() {
        let store = store();
        let err = store
            .update_cart_quantity(ProductId::new(1), Quantity::ONE)
            .expect_err("nothing in cart");
        assert!(matches!(err, StoreError::LineNotFound(_)));
    }

    #[test]
    fn test_remove_and_clear_are_unconditional() {
        let store = store();
        let id = ProductId::new(1);
        store.add_to_cart(id, Quantity::ONE).expect("add");

        store.remove_from_cart(ProductId::new(99)); // absent: no-op
        assert_eq!(store.cart().len(), 1);

        store.remove_from_cart(id);
        assert!(store.cart().is_empty());

        store.add_to_cart(id, Quantity::ONE).expect("add again");
        store.clear_cart();
        assert!(store.cart().is_empty());
        assert_eq!(store.cart_item_count(), 0);
    }

    #[test]
    fn test_cart_total_sums_lines() {
        let store = MemoryStore::with_products(vec![product(1, 10, 1000), product(2, 10, 500)]);
        store
            .add_to_cart(ProductId::new(1), Quantity::new(2).expect("valid"))
            .expect("add");
        store
            .add_to_cart(ProductId::new(2), Quantity::ONE)
            .expect("add");

        assert_eq!(store.cart_total(), Decimal::new(2500, 2));
    }

    #[test]
    fn test_decrease_stock_is_all_or_nothing() {
        let store = store();
        let id = ProductId::new(1);

        assert!(!store.decrease_stock(id, 4));
        assert_eq!(store.product_by_id(id).expect("present").stock, 3);

        assert!(store.decrease_stock(id, 3));
        assert_eq!(store.product_by_id(id).expect("present").stock, 0);

        assert!(!store.decrease_stock(ProductId::new(99), 1));
    }

    #[test]
    fn test_restore_stock_returns_units() {
        let store = store();
        let id = ProductId::new(1);
        assert!(store.decrease_stock(id, 2));
        store.restore_stock(id, 2);
        assert_eq!(store.product_by_id(id).expect("present").stock, 3);

        store.restore_stock(ProductId::new(99), 5); // absent: no-op
    }

    #[test]
    fn test_orders_get_sequential_ids() {
        let store = store();
        let first = store.create_order(Vec::new(), Decimal::ZERO);
        let second = store.create_order(Vec::new(), Decimal::ZERO);
        assert_eq!(first.id.as_i32(), 1);
        assert_eq!(second.id.as_i32(), 2);
        assert_eq!(store.orders().len(), 2);
    }

    #[test]
    fn test_session_lifecycle() {
        let store = store();
        assert!(store.current_session().is_none());

        store.open_session(Session {
            id: SessionId::generate(),
            user_id: UserId::new(7),
        });
        assert!(store.current_session().is_some());

        store.close_session();
        assert!(store.current_session().is_none());
    }
}
