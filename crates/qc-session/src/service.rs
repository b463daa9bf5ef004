//! Session Interceptor - core logic of the session layer.
//!
//! Owns no state of its own: the token, authenticated flag and permission
//! ids live in the injected [`SessionStore`].

use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use crate::domain::{ApiEnvelope, ExpiryPolicy, SessionConfig, SessionError, TransportError};
use crate::ports::inbound::SessionHooks;
use crate::ports::outbound::{Navigator, Notifier, SessionStore};

/// Attaches credentials and reacts to authorization failures.
pub struct SessionInterceptor {
    config: SessionConfig,
    header: HeaderName,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl SessionInterceptor {
    /// Create an interceptor. Fails if `config` does not validate.
    pub fn new(
        config: SessionConfig,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let header = HeaderName::from_bytes(config.authorization_header.as_bytes())
            .map_err(|_| {
                crate::domain::ConfigError::InvalidHeader(config.authorization_header.clone())
            })?;

        Ok(Self {
            config,
            header,
            store,
            notifier,
            navigator,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Store backing this interceptor.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    fn clear_on_any_error(&self, error: &TransportError) {
        // Only a payload carrying a message ends the session.
        let Some(payload) = error.payload() else {
            return;
        };
        let Some(message) = payload.message() else {
            return;
        };
        self.notifier.error(&message);
        self.store.put_is_authenticated(false);
        self.store.remove_token();
        info!(code = ?payload.code, "Session cleared after transport error");
    }

    fn clear_on_session_expired(&self, error: &TransportError) {
        let expired = error
            .payload()
            .and_then(|payload| payload.code)
            .is_some_and(|code| code == self.config.session_expired_code);
        if !expired {
            return;
        }
        self.store.remove_login_state();
        self.notifier.error(&self.config.session_expired_message);
        self.navigator.navigate(&self.config.root_route);
        info!(
            route = %self.config.root_route,
            "Session expired, login state removed"
        );
    }
}

impl SessionHooks for SessionInterceptor {
    fn on_outgoing_request(&self, mut request: reqwest::Request) -> reqwest::Request {
        let Some(token) = self.store.token() else {
            return request;
        };

        match HeaderValue::from_str(&token) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(self.header.clone(), value);
                debug!(url = %request.url(), "Authorization header attached");
            }
            Err(_) => {
                warn!(url = %request.url(), "Stored token is not a valid header value, skipped");
            }
        }
        request
    }

    fn on_response(&self, envelope: ApiEnvelope) -> Result<ApiEnvelope, SessionError> {
        if envelope.code == self.config.success_code {
            self.store.put_is_authenticated(true);
            return Ok(envelope);
        }

        let message = envelope.message();
        debug!(code = envelope.code, %message, "Envelope rejected");
        self.notifier.error(&message);
        Err(SessionError::Application(envelope))
    }

    fn on_transport_error(&self, error: TransportError) -> SessionError {
        match self.config.expiry_policy {
            ExpiryPolicy::ClearOnAnyError => self.clear_on_any_error(&error),
            ExpiryPolicy::ClearOnSessionExpired => self.clear_on_session_expired(&error),
        }
        SessionError::Transport(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, QueuedNavigator, QueuedNotifier};
    use crate::domain::{ErrorPayload, SessionState};
    use reqwest::{Method, StatusCode, Url};
    use serde_json::json;
    use shared_types::PermissionSet;

    struct Harness {
        store: Arc<InMemorySessionStore>,
        notifier: Arc<QueuedNotifier>,
        navigator: Arc<QueuedNavigator>,
        interceptor: SessionInterceptor,
    }

    fn harness(policy: ExpiryPolicy, state: SessionState) -> Harness {
        let store = Arc::new(InMemorySessionStore::with_state(state));
        let notifier = Arc::new(QueuedNotifier::new());
        let navigator = Arc::new(QueuedNavigator::new());
        let config = SessionConfig {
            expiry_policy: policy,
            ..Default::default()
        };
        let interceptor =
            SessionInterceptor::new(config, store.clone(), notifier.clone(), navigator.clone())
                .unwrap();
        Harness {
            store,
            notifier,
            navigator,
            interceptor,
        }
    }

    fn signed_in() -> SessionState {
        SessionState {
            token: Some("abc".into()),
            is_authenticated: true,
            permission_ids: PermissionSet::from([1, 2]),
        }
    }

    fn request() -> reqwest::Request {
        reqwest::Request::new(
            Method::GET,
            Url::parse("http://localhost/api/user").unwrap(),
        )
    }

    fn status_error(payload: Option<ErrorPayload>) -> TransportError {
        TransportError::Status {
            status: StatusCode::UNAUTHORIZED,
            payload,
        }
    }

    #[test]
    fn test_token_attached_verbatim() {
        let h = harness(ExpiryPolicy::default(), signed_in());
        let request = h.interceptor.on_outgoing_request(request());
        assert_eq!(request.headers()["authorization"], "abc");
        assert!(request.headers()["authorization"].is_sensitive());
    }

    #[test]
    fn test_no_token_leaves_request_unchanged() {
        let h = harness(ExpiryPolicy::default(), SessionState::default());
        let request = h.interceptor.on_outgoing_request(request());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_invalid_token_skipped() {
        let state = SessionState {
            token: Some("line\nbreak".into()),
            ..Default::default()
        };
        let h = harness(ExpiryPolicy::default(), state);
        let request = h.interceptor.on_outgoing_request(request());
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_custom_header_name() {
        let store = Arc::new(InMemorySessionStore::with_state(signed_in()));
        let config = SessionConfig {
            authorization_header: "x-session-token".into(),
            ..Default::default()
        };
        let interceptor = SessionInterceptor::new(
            config,
            store,
            Arc::new(QueuedNotifier::new()),
            Arc::new(QueuedNavigator::new()),
        )
        .unwrap();
        let request = interceptor.on_outgoing_request(request());
        assert_eq!(request.headers()["x-session-token"], "abc");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SessionConfig {
            session_expired_code: 0,
            ..Default::default()
        };
        let result = SessionInterceptor::new(
            config,
            Arc::new(InMemorySessionStore::new()),
            Arc::new(QueuedNotifier::new()),
            Arc::new(QueuedNavigator::new()),
        );
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn test_success_envelope_marks_authenticated() {
        let h = harness(ExpiryPolicy::default(), SessionState::default());
        let envelope = ApiEnvelope::ok(json!({"name": "admin"}));
        let result = h.interceptor.on_response(envelope.clone()).unwrap();
        assert_eq!(result, envelope);
        assert!(h.store.is_authenticated());
        assert!(h.notifier.drain().is_empty());
    }

    #[test]
    fn test_failed_envelope_notifies_and_rejects() {
        let h = harness(ExpiryPolicy::default(), SessionState::default());
        let err = h
            .interceptor
            .on_response(ApiEnvelope::failure(5, "bad input"))
            .unwrap_err();
        assert_eq!(err.application_code(), Some(5));
        assert!(!h.store.is_authenticated());
        assert_eq!(h.notifier.drain(), vec!["bad input".to_string()]);
    }

    #[test]
    fn test_failed_envelope_leaves_flag_untouched() {
        let h = harness(ExpiryPolicy::default(), signed_in());
        let _ = h.interceptor.on_response(ApiEnvelope::failure(5, "bad input"));
        assert!(h.store.is_authenticated());
        assert_eq!(h.store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_session_expired_clears_and_navigates() {
        let h = harness(ExpiryPolicy::ClearOnSessionExpired, signed_in());
        let err = h
            .interceptor
            .on_transport_error(status_error(Some(ErrorPayload::with_code(1001))));

        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(h.store.state(), SessionState::default());
        assert_eq!(
            h.notifier.drain(),
            vec![crate::domain::config::DEFAULT_SESSION_EXPIRED_MESSAGE.to_string()]
        );
        assert_eq!(h.navigator.drain(), vec!["/".to_string()]);
    }

    #[test]
    fn test_other_code_ignored_by_expiry_policy() {
        let h = harness(ExpiryPolicy::ClearOnSessionExpired, signed_in());
        let payload = ErrorPayload {
            code: Some(500),
            data: Some(json!("server error")),
        };
        let err = h.interceptor.on_transport_error(status_error(Some(payload)));

        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(h.store.state(), signed_in());
        assert!(h.notifier.drain().is_empty());
        assert!(h.navigator.drain().is_empty());
    }

    #[test]
    fn test_any_error_policy_clears_flag_and_token() {
        let h = harness(ExpiryPolicy::ClearOnAnyError, signed_in());
        let payload = ErrorPayload {
            code: Some(500),
            data: Some(json!("server error")),
        };
        let _ = h.interceptor.on_transport_error(status_error(Some(payload)));

        assert!(!h.store.is_authenticated());
        assert_eq!(h.store.token(), None);
        // permissions survive under this policy
        assert_eq!(h.store.permission_ids(), PermissionSet::from([1, 2]));
        assert_eq!(h.notifier.drain(), vec!["server error".to_string()]);
        assert!(h.navigator.drain().is_empty());
    }

    #[test]
    fn test_any_error_policy_without_message_keeps_session() {
        let payloads = [
            ErrorPayload::with_code(1001),
            ErrorPayload {
                code: None,
                data: Some(json!("")),
            },
        ];
        for payload in payloads {
            let h = harness(ExpiryPolicy::ClearOnAnyError, signed_in());
            let err = h.interceptor.on_transport_error(status_error(Some(payload)));

            assert!(matches!(err, SessionError::Transport(_)));
            assert_eq!(h.store.state(), signed_in());
            assert!(h.notifier.drain().is_empty());
            assert!(h.navigator.drain().is_empty());
        }
    }

    #[test]
    fn test_error_without_payload_passes_through() {
        for policy in [ExpiryPolicy::ClearOnAnyError, ExpiryPolicy::ClearOnSessionExpired] {
            let h = harness(policy, signed_in());
            let err = h
                .interceptor
                .on_transport_error(TransportError::Connection("offline".into()));
            assert!(err.to_string().contains("offline"));
            assert_eq!(h.store.state(), signed_in());
            assert!(h.notifier.drain().is_empty());
        }
    }
}
