//! Ports for the session layer.

pub mod inbound;
pub mod outbound;

pub use inbound::SessionHooks;
pub use outbound::{Navigator, Notifier, SessionStore};
