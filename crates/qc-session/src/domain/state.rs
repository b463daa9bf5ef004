//! Persisted login state.

use serde::{Deserialize, Serialize};
use shared_types::PermissionSet;

/// Everything a session store keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Opaque credential sent verbatim in the authorization header.
    pub token: Option<String>,
    /// Set by the last successful response, cleared on expiry.
    pub is_authenticated: bool,
    /// Permission ids granted to the signed-in user.
    pub permission_ids: PermissionSet,
}

impl SessionState {
    /// Drop token, flag and permissions.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_everything() {
        let mut state = SessionState {
            token: Some("t".into()),
            is_authenticated: true,
            permission_ids: PermissionSet::from([1, 2]),
        };
        state.clear();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let state: SessionState = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert!(!state.is_authenticated);
        assert!(state.permission_ids.is_empty());
    }
}
