//! UI chrome as explicit state and view models.
//!
//! Nothing here touches a DOM. Components own their state
//! ([`toast::ToastStack`], [`menu::ChromeState`]), interactions produce
//! declarative [`effect::Effect`] values, and rendering inputs are plain
//! view structs built from domain data ([`views`]). The host shell decides
//! how state and effects become pixels.

pub mod effect;
pub mod menu;
pub mod toast;
pub mod views;

pub use effect::{Effect, Page};
pub use menu::{ChromeState, ProfileAction, ProfileMenuView};
pub use toast::{Toast, ToastStack};
pub use views::{CartItemView, CartView, HomeView, ProductCardView, StockBadge};
