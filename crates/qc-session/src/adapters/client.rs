//! Backend client that runs every call through the session interceptor.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::PermissionSet;
use tracing::{debug, info};

use crate::domain::{ApiEnvelope, ErrorPayload, SessionError, TransportError};
use crate::ports::{SessionHooks, SessionStore};
use crate::service::SessionInterceptor;

/// Login endpoint.
pub const LOGIN_PATH: &str = "/api/login";

/// Permission list of the signed-in user.
pub const PERMISSIONS_PATH: &str = "/api/user/permissions";

/// Username and password sent to [`LOGIN_PATH`].
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Secret, never logged.
    pub password: String,
}

impl Credentials {
    /// Build credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `data` of a successful login envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Session token.
    pub token: String,
    /// Permissions granted to the user.
    #[serde(default)]
    pub permission_ids: PermissionSet,
}

/// Session-aware backend client.
pub struct SessionClient {
    client: Client,
    base_url: String,
    interceptor: Arc<SessionInterceptor>,
}

impl SessionClient {
    /// Create a client with the default timeouts.
    pub fn new(
        base_url: impl Into<String>,
        interceptor: Arc<SessionInterceptor>,
    ) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self::with_client(client, base_url, interceptor))
    }

    /// Create a client around an existing reqwest client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        interceptor: Arc<SessionInterceptor>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            interceptor,
        }
    }

    /// Backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Interceptor used for every call.
    pub fn interceptor(&self) -> &Arc<SessionInterceptor> {
        &self.interceptor
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the envelope's `data`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, SessionError> {
        let request = self
            .client
            .request(Method::GET, self.url(path))
            .build()
            .map_err(TransportError::Http)?;
        self.execute(request).await
    }

    /// POST `body` as JSON to `path` and decode the envelope's `data`.
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, SessionError> {
        let request = self
            .client
            .request(Method::POST, self.url(path))
            .json(body)
            .build()
            .map_err(TransportError::Http)?;
        self.execute(request).await
    }

    /// Send a prepared request through the three interception points.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<R, SessionError> {
        let request = self.interceptor.on_outgoing_request(request);
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let error = if e.is_connect() {
                    TransportError::Connection(format!("Cannot connect to {}", self.base_url))
                } else {
                    TransportError::Http(e)
                };
                return Err(self.interceptor.on_transport_error(error));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str::<ErrorPayload>(&body)
                .ok()
                .filter(|payload| !payload.is_empty());
            debug!(%status, has_payload = payload.is_some(), "Transport error");
            return Err(self
                .interceptor
                .on_transport_error(TransportError::Status { status, payload }));
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| SessionError::Parse(e.to_string()))?;
        let envelope = self.interceptor.on_response(envelope)?;

        serde_json::from_value(envelope.data).map_err(|e| SessionError::Parse(e.to_string()))
    }

    /// Sign in and store the token and permissions.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, SessionError> {
        let response: LoginResponse = self.post(LOGIN_PATH, credentials).await?;

        let store = self.interceptor.store();
        store.put_token(response.token.clone());
        store.put_permission_ids(response.permission_ids.clone());
        store.put_is_authenticated(true);
        info!(
            username = %credentials.username,
            permissions = response.permission_ids.len(),
            "Signed in"
        );
        Ok(response)
    }

    /// Reload the signed-in user's permissions into the store.
    pub async fn fetch_permissions(&self) -> Result<PermissionSet, SessionError> {
        let ids: PermissionSet = self.get(PERMISSIONS_PATH).await?;
        self.interceptor.store().put_permission_ids(ids.clone());
        debug!(count = ids.len(), "Permissions refreshed");
        Ok(ids)
    }

    /// Forget the session locally.
    pub fn logout(&self) {
        self.interceptor.store().remove_login_state();
        info!("Signed out");
    }
}
