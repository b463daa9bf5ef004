//! Backend response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application-level envelope carried by every backend response.
///
/// `code` equal to the configured success code means logical success;
/// any other value is a failure whose `data` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Application result code.
    pub code: i64,
    /// Payload on success, message on failure.
    #[serde(default)]
    pub data: Value,
}

impl ApiEnvelope {
    /// Successful envelope carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self { code: 0, data }
    }

    /// Failed envelope carrying a message.
    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            data: Value::String(message.into()),
        }
    }

    /// `data` rendered as text. Strings are returned without quotes.
    pub fn message(&self) -> String {
        value_text(&self.data).unwrap_or_default()
    }
}

/// Structured body attached to a transport-level error (non-2xx status).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Application code, `1001` for an expired session.
    #[serde(default)]
    pub code: Option<i64>,
    /// Optional message.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ErrorPayload {
    /// Payload with only a code.
    pub fn with_code(code: i64) -> Self {
        Self {
            code: Some(code),
            data: None,
        }
    }

    /// Message carried in `data`, if any non-empty one is present.
    pub fn message(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(value_text)
            .filter(|text| !text.is_empty())
    }

    /// True when neither a code nor data is present.
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.data.as_ref().map_or(true, Value::is_null)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
