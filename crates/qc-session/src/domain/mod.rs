//! Domain layer for the session interceptor.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod state;

pub use config::{ConfigError, ExpiryPolicy, SessionConfig};
pub use envelope::{ApiEnvelope, ErrorPayload};
pub use errors::{SessionError, TransportError};
pub use state::SessionState;
