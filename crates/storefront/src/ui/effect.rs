//! Declarative UI effects.
//!
//! Timed navigation is fire-and-forget data instead of a timer callback:
//! interactions return an [`Effect`] and the host shell schedules it. None
//! of these require cancellation support.

use std::time::Duration;

use vitrine_core::OrderId;

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// Navigation targets within the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The product grid.
    Home,
    /// The login surface.
    Login,
    /// The shopper's order history.
    Orders,
    /// Post-checkout confirmation for one order.
    OrderConfirmation(OrderId),
    /// The staff dashboard.
    AdminDashboard,
}

impl Page {
    /// Path for the host shell's router.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Orders => "/orders".to_owned(),
            Self::OrderConfirmation(id) => format!("/orders/{id}"),
            Self::AdminDashboard => "/admin/dashboard".to_owned(),
        }
    }
}

/// An effect for the host shell to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to `page` after the given pause. A `Duration::ZERO` pause
    /// means immediately.
    Redirect {
        /// Destination page.
        page: Page,
        /// UX pause before navigating, not a correctness requirement.
        after: Duration,
    },
}

impl Effect {
    /// An immediate redirect.
    #[must_use]
    pub const fn go_to(page: Page) -> Self {
        Self::Redirect {
            page,
            after: Duration::ZERO,
        }
    }
}

/// Follow-up navigation for an error, if it has one.
///
/// `AuthRequired` sends the shopper to the login page after a short pause
/// so the toast explaining why is readable first.
#[must_use]
pub fn error_effect(err: &StorefrontError, config: &StorefrontConfig) -> Option<Effect> {
    match err {
        StorefrontError::AuthRequired => Some(Effect::Redirect {
            page: Page::Login,
            after: config.login_redirect_delay,
        }),
        _ => None,
    }
}

/// Post-checkout navigation to the confirmation page.
#[must_use]
pub fn checkout_effect(order_id: OrderId, config: &StorefrontConfig) -> Effect {
    Effect::Redirect {
        page: Page::OrderConfirmation(order_id),
        after: config.checkout_redirect_delay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::OrderConfirmation(OrderId::new(7)).path(), "/orders/7");
    }

    #[test]
    fn test_auth_required_redirects_to_login() {
        let config = StorefrontConfig::default();
        let effect = error_effect(&StorefrontError::AuthRequired, &config);
        assert_eq!(
            effect,
            Some(Effect::Redirect {
                page: Page::Login,
                after: config.login_redirect_delay,
            })
        );
    }

    #[test]
    fn test_stock_errors_have_no_navigation() {
        let config = StorefrontConfig::default();
        assert_eq!(error_effect(&StorefrontError::EmptyCart, &config), None);
    }

    #[test]
    fn test_checkout_pause_comes_from_config() {
        let config = StorefrontConfig::default();
        let Effect::Redirect { page, after } = checkout_effect(OrderId::new(3), &config);
        assert_eq!(page, Page::OrderConfirmation(OrderId::new(3)));
        assert_eq!(after, config.checkout_redirect_delay);
    }
}
