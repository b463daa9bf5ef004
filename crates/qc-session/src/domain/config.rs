//! Session interceptor configuration with validation.

use serde::{Deserialize, Serialize};
use shared_types::ROOT_ROUTE;
use thiserror::Error;

/// Default application code for a logically successful response.
pub const DEFAULT_SUCCESS_CODE: i64 = 0;

/// Default application code signalling an expired session.
pub const DEFAULT_SESSION_EXPIRED_CODE: i64 = 1001;

/// Default notification shown when the session expires.
pub const DEFAULT_SESSION_EXPIRED_MESSAGE: &str = "Session expired, please sign in again";

/// What to do when a transport error carries a structured payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Any structured error carrying a message ends the session: notify the
    /// message, clear the authenticated flag and the token. Errors without a
    /// message pass through untouched.
    ClearOnAnyError,
    /// Only the session-expired code ends the session: clear all login
    /// state, notify, and navigate to the root route.
    #[default]
    ClearOnSessionExpired,
}

/// Session interceptor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Envelope code meaning success
    pub success_code: i64,
    /// Transport payload code meaning the session expired
    pub session_expired_code: i64,
    /// Notification text shown on expiry
    pub session_expired_message: String,
    /// Route navigated to after the session expires
    pub root_route: String,
    /// Reaction to structured transport errors
    pub expiry_policy: ExpiryPolicy,
    /// Header the token is written to
    pub authorization_header: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            success_code: DEFAULT_SUCCESS_CODE,
            session_expired_code: DEFAULT_SESSION_EXPIRED_CODE,
            session_expired_message: DEFAULT_SESSION_EXPIRED_MESSAGE.to_string(),
            root_route: ROOT_ROUTE.to_string(),
            expiry_policy: ExpiryPolicy::default(),
            authorization_header: "authorization".to_string(),
        }
    }
}

impl SessionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.success_code == self.session_expired_code {
            return Err(ConfigError::ConflictingCodes(self.success_code));
        }

        if !self.root_route.starts_with('/') {
            return Err(ConfigError::InvalidRoute(self.root_route.clone()));
        }

        if reqwest::header::HeaderName::from_bytes(self.authorization_header.as_bytes()).is_err() {
            return Err(ConfigError::InvalidHeader(
                self.authorization_header.clone(),
            ));
        }

        Ok(())
    }

    /// Parse configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Success and session-expired codes collide
    #[error("success code and session expired code are both {0}")]
    ConflictingCodes(i64),
    /// Root route is not absolute
    #[error("invalid root route: {0}")]
    InvalidRoute(String),
    /// Authorization header name is not a valid HTTP header
    #[error("invalid authorization header name: {0}")]
    InvalidHeader(String),
    /// Configuration file could not be parsed
    #[error("invalid session config: {0}")]
    Parse(String),
}
