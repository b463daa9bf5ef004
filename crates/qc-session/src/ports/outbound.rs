//! Outbound (Driven) ports for the session layer.
//!
//! These traits define what the interceptor needs from its host: somewhere
//! to keep login state, a way to tell the user something went wrong, and
//! a way to force navigation.

use shared_types::PermissionSet;

/// Key-value storage for login state.
///
/// Implementations use interior locking; every method takes `&self` so a
/// store can be shared behind an `Arc` by concurrent requests.
pub trait SessionStore: Send + Sync {
    /// Current token, if signed in.
    fn token(&self) -> Option<String>;

    /// Replace the token.
    fn put_token(&self, token: String);

    /// Drop the token only.
    fn remove_token(&self);

    /// Whether the last response confirmed the session.
    fn is_authenticated(&self) -> bool;

    /// Set the authenticated flag.
    fn put_is_authenticated(&self, value: bool);

    /// Clears token, authenticated flag and permission ids.
    fn remove_login_state(&self);

    /// Permission ids of the signed-in user. Empty when signed out.
    fn permission_ids(&self) -> PermissionSet;

    /// Replace the permission ids.
    fn put_permission_ids(&self, ids: PermissionSet);
}

/// User-visible error notification.
pub trait Notifier: Send + Sync {
    /// Show `message` as an error.
    fn error(&self, message: &str);
}

/// Forced navigation.
pub trait Navigator: Send + Sync {
    /// Move the user to `route`.
    fn navigate(&self, route: &str);
}
