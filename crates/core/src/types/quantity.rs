//! Cart line quantity type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum QuantityError {
    /// Quantities start at one; a line that would reach zero must be
    /// removed instead.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A cart line quantity.
///
/// Always at least 1. A line with zero items does not exist - removal is a
/// separate operation from quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum quantity, one.
    pub const ONE: Self = Self(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `value` is 0.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(value))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Quantity increased by `n`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(&self, n: u32) -> Self {
        Self(self.0.saturating_add(n))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_rejected() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(1).is_ok());
    }

    #[test]
    fn test_saturating_add() {
        let qty = Quantity::new(2).expect("valid");
        assert_eq!(qty.saturating_add(3).get(), 5);
        assert_eq!(Quantity::new(u32::MAX).expect("valid").saturating_add(1).get(), u32::MAX);
    }
}
