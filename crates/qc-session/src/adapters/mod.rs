//! Adapters for the session layer.
//!
//! - `memory_store` / `file_store`: [`SessionStore`](crate::ports::SessionStore) implementations
//! - `notifier`: notification and navigation sinks
//! - `client`: reqwest client running every call through the interceptor

pub mod client;
pub mod file_store;
pub mod memory_store;
pub mod notifier;

pub use client::{Credentials, LoginResponse, SessionClient};
pub use file_store::FileSessionStore;
pub use memory_store::InMemorySessionStore;
pub use notifier::{NoopNavigator, QueuedNavigator, QueuedNotifier, TracingNotifier};
