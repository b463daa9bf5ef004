//! Error types for the session layer.

use thiserror::Error;

use super::config::ConfigError;
use super::envelope::{ApiEnvelope, ErrorPayload};

/// Failure below the application envelope: a non-2xx status or a
/// request that never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server answered with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// Response status.
        status: reqwest::StatusCode,
        /// Structured body, when the server sent one.
        payload: Option<ErrorPayload>,
    },
    /// reqwest failure other than a refused connection.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Backend unreachable.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Structured body carried by the error, if any.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Status { payload, .. } => payload.as_ref(),
            Self::Http(_) | Self::Connection(_) => None,
        }
    }
}

/// Errors surfaced to callers of the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Envelope code other than success. The user was already notified.
    #[error("request rejected (code {}): {}", .0.code, .0.message())]
    Application(ApiEnvelope),
    /// Transport failure, re-raised after the expiry policy ran.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// Interceptor misconfigured.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Application code of a rejected envelope.
    pub fn application_code(&self) -> Option<i64> {
        match self {
            Self::Application(envelope) => Some(envelope.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_display() {
        let err = SessionError::Application(ApiEnvelope::failure(5, "bad input"));
        let text = err.to_string();
        assert!(text.contains("code 5"));
        assert!(text.contains("bad input"));
        assert_eq!(err.application_code(), Some(5));
    }

    #[test]
    fn test_transport_payload_access() {
        let err = TransportError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            payload: Some(ErrorPayload::with_code(1001)),
        };
        assert_eq!(err.payload().and_then(|p| p.code), Some(1001));
        assert!(err.to_string().contains("401"));

        let offline = TransportError::Connection("Cannot connect".into());
        assert!(offline.payload().is_none());
    }

    #[test]
    fn test_config_error_converts() {
        let err: SessionError = ConfigError::InvalidRoute("x".into()).into();
        assert!(err.to_string().contains("invalid root route"));
        assert_eq!(err.application_code(), None);
    }
}
