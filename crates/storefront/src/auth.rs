//! Auth Provider collaborator contract.
//!
//! Authentication is external to the storefront; the interaction layer only
//! asks who is signed in and forwards logout requests.

use std::sync::{Arc, RwLock};

use crate::models::CurrentUser;

/// The authentication collaborator.
pub trait AuthProvider {
    /// Process-wide setup. Called once when the storefront starts.
    fn init(&self);

    /// The signed-in shopper, if any.
    fn current_user(&self) -> Option<CurrentUser>;

    /// Sign the current shopper out.
    fn logout(&self);
}

/// In-memory [`AuthProvider`] for tests and the demo binary.
#[derive(Clone, Default)]
pub struct MemoryAuth {
    user: Arc<RwLock<Option<CurrentUser>>>,
}

impl MemoryAuth {
    /// Create a provider with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a shopper in.
    pub fn sign_in(&self, user: CurrentUser) {
        *self.user.write().expect("RwLock poisoned") = Some(user);
    }
}

impl AuthProvider for MemoryAuth {
    fn init(&self) {
        tracing::debug!("auth provider initialized");
    }

    fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().expect("RwLock poisoned").clone()
    }

    fn logout(&self) {
        *self.user.write().expect("RwLock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::{Email, Role};

    use super::*;

    #[test]
    fn test_sign_in_and_logout() {
        let auth = MemoryAuth::new();
        assert!(auth.current_user().is_none());

        auth.sign_in(CurrentUser {
            name: "Ana".to_owned(),
            email: Email::parse("ana@example.com").expect("valid"),
            role: Role::Customer,
        });
        assert_eq!(auth.current_user().expect("signed in").name, "Ana");

        auth.logout();
        assert!(auth.current_user().is_none());
    }
}
