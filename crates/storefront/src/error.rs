//! Unified error handling for the storefront.
//!
//! Errors here are recoverable and user-facing: each maps to a transient
//! toast rather than a failure of the process. Handlers surface them with
//! [`StorefrontError::user_message`]; nothing is fatal and there is no
//! retry logic - the store is synchronous and in-process.

use thiserror::Error;

use vitrine_core::ProductId;

use crate::store::StoreError;

/// Storefront-level error type.
#[derive(Debug, Clone, Error)]
pub enum StorefrontError {
    /// The product does not exist.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The product has zero stock.
    #[error("{name} is sold out")]
    OutOfStock {
        /// Product display name.
        name: String,
    },

    /// The store rejected the requested quantity; the message is
    /// store-supplied and already shopper-readable.
    #[error("{0}")]
    InsufficientStock(String),

    /// Quantity updates below 1 are rejected; use remove instead.
    #[error("quantity must be at least 1; remove the item instead")]
    InvalidQuantity,

    /// Checkout requires at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout requires a signed-in shopper.
    #[error("sign in to complete your purchase")]
    AuthRequired,

    /// One or more lines failed the stock decrement at checkout. Every line
    /// is attempted; this accumulates the per-line messages.
    #[error("checkout failed: {}", .0.join("; "))]
    Checkout(Vec<String>),
}

impl StorefrontError {
    /// Toast title and body for surfacing this error to the shopper.
    #[must_use]
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            Self::NotFound(_) => ("Error", "Product not found.".to_owned()),
            Self::OutOfStock { name } => ("Error", format!("{name} is sold out!")),
            Self::InsufficientStock(message) => ("Stock", message.clone()),
            Self::InvalidQuantity => (
                "Cart",
                "Quantity must be at least 1. Remove the item instead.".to_owned(),
            ),
            Self::EmptyCart => ("Error", "Your cart is empty.".to_owned()),
            Self::AuthRequired => ("Heads up", "Sign in to complete your purchase.".to_owned()),
            Self::Checkout(messages) => ("Stock", messages.join(" ")),
        }
    }
}

impl From<StoreError> for StorefrontError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) | StoreError::LineNotFound(id) => Self::NotFound(id),
            StoreError::OutOfStock { name } => Self::OutOfStock { name },
            StoreError::InsufficientStock { .. } => Self::InsufficientStock(err.to_string()),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rejection_keeps_message() {
        let err = StorefrontError::from(StoreError::InsufficientStock {
            name: "Keyboard".to_owned(),
            requested: 5,
            available: 3,
        });
        let StorefrontError::InsufficientStock(message) = &err else {
            panic!("wrong variant: {err:?}");
        };
        assert!(message.contains("Keyboard"));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_user_messages_have_titles() {
        let (title, body) = StorefrontError::EmptyCart.user_message();
        assert_eq!(title, "Error");
        assert!(!body.is_empty());

        let (title, _) = StorefrontError::AuthRequired.user_message();
        assert_eq!(title, "Heads up");
    }
}
