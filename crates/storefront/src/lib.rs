//! Vitrine Storefront library.
//!
//! The client-side interaction layer of a small storefront: product grid
//! view models, shopping cart management with stock-aware reconciliation,
//! a simplified checkout flow, and UI chrome state (dropdowns, toasts,
//! profile menu).
//!
//! There is no networked backend and no persistence engine. The catalog and
//! cart live in an external store, and authentication in an external
//! provider; both are black-box collaborators behind the
//! [`store::CatalogStore`] and [`auth::AuthProvider`] traits. UI chrome is
//! modeled as explicit state plus declarative [`ui::Effect`] values rather
//! than direct rendering.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod ui;
