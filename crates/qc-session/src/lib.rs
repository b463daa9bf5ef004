//! # QC Session
//!
//! Session layer between the console and its backend.
//!
//! **Architecture:** Hexagonal (Ports & Adapters)
//!
//! ## Purpose
//!
//! Every backend call passes through three hooks:
//! - **outgoing request**: the stored token is attached as the authorization header
//! - **response**: the body's application `code` decides success; anything but
//!   the success code is shown to the user and turned into an error
//! - **transport error**: a structured error body may end the session
//!   (see [`ExpiryPolicy`]); the error is always handed back to the caller
//!
//! The layer never retries and never swallows an error.
//!
//! ## Module Structure
//!
//! ```text
//! qc-session/
//! ├── domain/          # envelopes, session state, config, errors
//! ├── ports/           # SessionHooks (inbound), SessionStore/Notifier/Navigator (outbound)
//! ├── service.rs       # SessionInterceptor
//! └── adapters/        # stores, notifiers, reqwest client
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use qc_session::{
//!     InMemorySessionStore, NoopNavigator, SessionClient, SessionConfig, SessionInterceptor,
//!     TracingNotifier,
//! };
//!
//! let interceptor = SessionInterceptor::new(
//!     SessionConfig::default(),
//!     Arc::new(InMemorySessionStore::new()),
//!     Arc::new(TracingNotifier),
//!     Arc::new(NoopNavigator),
//! )?;
//! let client = SessionClient::new("http://127.0.0.1:8080", Arc::new(interceptor))?;
//! let health: serde_json::Value = client.get("/api/health").await?;
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{
    Credentials, FileSessionStore, InMemorySessionStore, LoginResponse, NoopNavigator,
    QueuedNavigator, QueuedNotifier, SessionClient, TracingNotifier,
};
pub use domain::{
    ApiEnvelope, ConfigError, ErrorPayload, ExpiryPolicy, SessionConfig, SessionError,
    SessionState, TransportError,
};
pub use ports::{Navigator, Notifier, SessionHooks, SessionStore};
pub use service::SessionInterceptor;
