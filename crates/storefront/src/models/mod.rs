//! Domain models for the storefront.
//!
//! These are validated domain objects, separate from any view types in
//! [`crate::ui`].

pub mod cart;
pub mod order;
pub mod product;
pub mod session;

pub use cart::CartLine;
pub use order::Order;
pub use product::Product;
pub use session::{CurrentUser, Session};
