//! Dropdown and profile menu state.
//!
//! The two header dropdowns are mutually exclusive, an outside click closes
//! both, and profile entries dispatch through [`ProfileAction`] rather than
//! string keys.

use vitrine_core::Email;

use crate::auth::AuthProvider;
use crate::models::CurrentUser;

use super::effect::{Effect, Page};

/// Open/closed state of the header dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeState {
    /// Category dropdown open?
    pub categories_open: bool,
    /// Profile dropdown open?
    pub profile_open: bool,
}

impl ChromeState {
    /// Closed dropdowns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories_open: false,
            profile_open: false,
        }
    }

    /// Toggle the category dropdown, closing the profile one.
    pub const fn toggle_categories(&mut self) {
        self.categories_open = !self.categories_open;
        self.profile_open = false;
    }

    /// Toggle the profile dropdown, closing the category one.
    pub const fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
        self.categories_open = false;
    }

    /// A click outside either dropdown closes both.
    pub const fn outside_click(&mut self) {
        self.categories_open = false;
        self.profile_open = false;
    }

    /// Dispatch a profile menu action.
    ///
    /// The dropdown closes, then the action runs: navigation actions return
    /// an immediate redirect, logout goes to the auth provider.
    pub fn dispatch_profile(
        &mut self,
        action: ProfileAction,
        auth: &impl AuthProvider,
    ) -> Option<Effect> {
        self.profile_open = false;
        match action {
            ProfileAction::MyOrders => Some(Effect::go_to(Page::Orders)),
            ProfileAction::Admin => Some(Effect::go_to(Page::AdminDashboard)),
            ProfileAction::Logout => {
                auth.logout();
                None
            }
        }
    }
}

/// Entries of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    /// Go to the shopper's order history.
    MyOrders,
    /// Go to the staff dashboard.
    Admin,
    /// Sign out.
    Logout,
}

/// What the profile dropdown shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileMenuView {
    /// Anonymous shopper: a login prompt.
    SignedOut,
    /// Signed-in shopper: identity plus menu entries.
    SignedIn {
        /// Display name.
        name: String,
        /// Email address.
        email: Email,
        /// Whether the admin entry is shown.
        show_admin: bool,
    },
}

impl ProfileMenuView {
    /// Build the view for the current (possibly absent) user.
    #[must_use]
    pub fn for_user(user: Option<&CurrentUser>) -> Self {
        user.map_or(Self::SignedOut, |user| Self::SignedIn {
            name: user.name.clone(),
            email: user.email.clone(),
            show_admin: user.role.is_admin(),
        })
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::Role;

    use crate::auth::MemoryAuth;

    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            name: "Ana".to_owned(),
            email: Email::parse("ana@example.com").expect("valid"),
            role,
        }
    }

    #[test]
    fn test_dropdowns_are_mutually_exclusive() {
        let mut chrome = ChromeState::new();

        chrome.toggle_categories();
        assert!(chrome.categories_open);

        chrome.toggle_profile();
        assert!(chrome.profile_open);
        assert!(!chrome.categories_open);

        chrome.toggle_categories();
        assert!(chrome.categories_open);
        assert!(!chrome.profile_open);
    }

    #[test]
    fn test_outside_click_closes_both() {
        let mut chrome = ChromeState::new();
        chrome.toggle_profile();
        chrome.outside_click();
        assert_eq!(chrome, ChromeState::new());
    }

    #[test]
    fn test_navigation_actions_redirect_immediately() {
        let auth = MemoryAuth::new();
        let mut chrome = ChromeState::new();
        chrome.toggle_profile();

        let effect = chrome.dispatch_profile(ProfileAction::MyOrders, &auth);
        assert_eq!(effect, Some(Effect::go_to(Page::Orders)));
        assert!(!chrome.profile_open);
    }

    #[test]
    fn test_logout_goes_through_the_provider() {
        let auth = MemoryAuth::new();
        auth.sign_in(user(Role::Customer));
        let mut chrome = ChromeState::new();

        let effect = chrome.dispatch_profile(ProfileAction::Logout, &auth);
        assert_eq!(effect, None);
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_menu_view_varies_by_role() {
        assert_eq!(ProfileMenuView::for_user(None), ProfileMenuView::SignedOut);

        let customer = user(Role::Customer);
        let ProfileMenuView::SignedIn { show_admin, .. } =
            ProfileMenuView::for_user(Some(&customer))
        else {
            panic!("expected signed-in view");
        };
        assert!(!show_admin);

        let admin = user(Role::Admin);
        let ProfileMenuView::SignedIn { show_admin, name, .. } =
            ProfileMenuView::for_user(Some(&admin))
        else {
            panic!("expected signed-in view");
        };
        assert!(show_admin);
        assert_eq!(name, "Ana");
    }
}
