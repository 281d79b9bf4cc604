//! Application state shared across interactions.

use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::config::StorefrontConfig;
use crate::services::CartReconciler;
use crate::store::CatalogStore;

/// State shared by every storefront interaction.
///
/// Cheaply cloneable via `Arc`. The store and auth provider are the two
/// external collaborators; everything else in the storefront is derived
/// from them plus configuration.
pub struct AppState<S, A> {
    inner: Arc<AppStateInner<S, A>>,
}

impl<S, A> Clone for AppState<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct AppStateInner<S, A> {
    config: StorefrontConfig,
    store: S,
    auth: A,
}

impl<S: CatalogStore, A: AuthProvider> AppState<S, A> {
    /// Create application state and run process-wide auth setup.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: S, auth: A) -> Self {
        auth.init();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                auth,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog/cart store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Get a reference to the auth provider.
    #[must_use]
    pub fn auth(&self) -> &A {
        &self.inner.auth
    }

    /// A cart reconciler over this state's store.
    #[must_use]
    pub fn cart(&self) -> CartReconciler<'_, S> {
        CartReconciler::new(&self.inner.store)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::MemoryAuth;
    use crate::store::MemoryStore;

    use super::*;

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(
            StorefrontConfig::default(),
            MemoryStore::new(),
            MemoryAuth::new(),
        );
        let clone = state.clone();

        assert_eq!(state.cart().item_count(), 0);
        assert_eq!(clone.cart().item_count(), 0);
        assert!(Arc::ptr_eq(&state.inner, &clone.inner));
    }
}
