//! Session and signed-in user types.

use serde::{Deserialize, Serialize};

use vitrine_core::{Email, Role, SessionId, UserId};

/// Evidence of an authenticated shopper.
///
/// Absence of a session means the shopper is anonymous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token.
    pub id: SessionId,
    /// The user this session belongs to.
    pub user_id: UserId,
}

/// Minimal identity of the signed-in shopper, as reported by the auth
/// provider for profile surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Shopper role.
    pub role: Role,
}
