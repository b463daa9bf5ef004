//! Wiring between the console and the session layer.
//!
//! The interceptor reports through queues; the UI loop drains them into
//! the [`App`] with [`ConsoleSession::pump`].

use std::sync::Arc;

use qc_session::{
    Credentials, FileSessionStore, InMemorySessionStore, QueuedNavigator, QueuedNotifier,
    SessionClient, SessionConfig, SessionError, SessionInterceptor, SessionStore,
};
use shared_types::PermissionSet;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::ConsoleConfig;
use crate::domain::App;

/// Session store, backend client and the queues the interceptor reports to.
pub struct ConsoleSession {
    store: Arc<dyn SessionStore>,
    client: Option<SessionClient>,
    notifier: Arc<QueuedNotifier>,
    navigator: Arc<QueuedNavigator>,
    demo: bool,
}

impl ConsoleSession {
    /// Open the store and, outside demo mode, build the backend client.
    pub fn connect(
        config: &ConsoleConfig,
        session_config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let store: Arc<dyn SessionStore> = match &config.state_path {
            Some(path) => Arc::new(FileSessionStore::open(path)?),
            None => Arc::new(InMemorySessionStore::new()),
        };
        let notifier = Arc::new(QueuedNotifier::new());
        let navigator = Arc::new(QueuedNavigator::new());

        if config.demo {
            store.put_permission_ids(ConsoleConfig::demo_permissions());
            store.put_is_authenticated(true);
            info!("Demo mode, backend disabled");
            return Ok(Self {
                store,
                client: None,
                notifier,
                navigator,
                demo: true,
            });
        }

        let interceptor = SessionInterceptor::new(
            session_config,
            store.clone(),
            notifier.clone(),
            navigator.clone(),
        )?;
        let client = SessionClient::new(&config.endpoint, Arc::new(interceptor))?;
        info!(endpoint = %config.endpoint, "Backend client ready");

        Ok(Self {
            store,
            client: Some(client),
            notifier,
            navigator,
            demo: false,
        })
    }

    /// Permissions currently held by the store.
    pub fn permissions(&self) -> PermissionSet {
        self.store.permission_ids()
    }

    /// Short description of the session for the header.
    pub fn label(&self) -> &'static str {
        if self.demo {
            "demo"
        } else if self.store.is_authenticated() {
            "signed in"
        } else if self.store.token().is_some() {
            "token stored"
        } else {
            "signed out"
        }
    }

    /// Sign in with `credentials`. A no-op in demo mode.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        if let Some(client) = &self.client {
            client.login(credentials).await?;
        }
        Ok(())
    }

    /// Reload permissions from the backend and re-project the menu.
    pub async fn refresh(&self, app: &Mutex<App>) {
        let result = match &self.client {
            Some(client) => Some(client.fetch_permissions().await),
            None => None,
        };

        let mut app = app.lock().await;
        match result {
            Some(Ok(ids)) => {
                app.set_permissions(ids);
                app.last_refresh = Some(chrono::Utc::now());
            }
            Some(Err(e)) => {
                warn!(error = %e, "Permission refresh failed");
                app.error_message = Some(format!("Permissions: {}", e));
                // expiry may have cleared the store
                app.set_permissions(self.store.permission_ids());
            }
            None => {
                app.last_refresh = Some(chrono::Utc::now());
            }
        }
        self.pump(&mut app);
    }

    /// Forget the session and hide everything but the landing page.
    pub fn logout(&self, app: &mut App) {
        match &self.client {
            Some(client) => client.logout(),
            None => self.store.remove_login_state(),
        }
        app.set_permissions(PermissionSet::new());
        self.pump(app);
    }

    /// Move queued notifications and navigation into `app`.
    pub fn pump(&self, app: &mut App) {
        app.apply_notifications(self.notifier.drain());
        app.apply_navigation(self.navigator.drain());
        app.session_label = self.label().to_string();
    }
}
