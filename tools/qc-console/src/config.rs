//! Console configuration assembled from command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use qc_navigation::{MenuError, MenuTree};
use qc_session::{ConfigError as SessionConfigError, Credentials, SessionConfig};
use shared_types::{PermissionSet, INDEX_ROUTE};
use thiserror::Error;
use tracing::info;

/// Permissions applied in demo mode: everything except `/user/account`,
/// `/system/permission` and `/data`.
pub const DEMO_PERMISSIONS: [u32; 4] = [2, 3, 5, 7];

/// Fully resolved console settings.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL.
    pub endpoint: String,
    /// Menu configuration file; the built-in console menu when absent.
    pub menu_path: Option<PathBuf>,
    /// Session state file; in-memory state when absent.
    pub state_path: Option<PathBuf>,
    /// Session layer configuration file.
    pub session_config_path: Option<PathBuf>,
    /// Route opened at startup.
    pub initial_route: String,
    /// Offline mode with preset permissions.
    pub demo: bool,
    /// Interval between permission refreshes.
    pub refresh: Duration,
    /// Log file; the terminal belongs to the UI.
    pub log_file: PathBuf,
    /// Credentials to sign in with at startup.
    pub login: Option<Credentials>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080".to_string(),
            menu_path: None,
            state_path: None,
            session_config_path: None,
            initial_route: INDEX_ROUTE.to_string(),
            demo: false,
            refresh: Duration::from_secs(30),
            log_file: PathBuf::from("qc-console.log"),
            login: None,
        }
    }
}

impl ConsoleConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConsoleConfigError> {
        if !self.demo
            && !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"))
        {
            return Err(ConsoleConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if !self.initial_route.starts_with('/') {
            return Err(ConsoleConfigError::InvalidRoute(self.initial_route.clone()));
        }

        if self.refresh.is_zero() {
            return Err(ConsoleConfigError::InvalidRefresh);
        }

        Ok(())
    }

    /// Menu to navigate: the configured file, or the built-in console menu.
    pub fn load_menu(&self) -> Result<MenuTree, ConsoleConfigError> {
        match &self.menu_path {
            Some(path) => Ok(MenuTree::from_path(path)?),
            None => {
                info!("Using built-in console menu");
                Ok(MenuTree::console_default())
            }
        }
    }

    /// Session layer configuration, defaults when no file is given.
    pub fn load_session_config(&self) -> Result<SessionConfig, ConsoleConfigError> {
        let Some(path) = &self.session_config_path else {
            return Ok(SessionConfig::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| ConsoleConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(SessionConfig::from_json_str(&json)?)
    }

    /// Permissions granted in demo mode.
    pub fn demo_permissions() -> PermissionSet {
        PermissionSet::from(DEMO_PERMISSIONS)
    }
}

/// Console configuration errors
#[derive(Debug, Error)]
pub enum ConsoleConfigError {
    /// Endpoint is not an HTTP URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Initial route is not absolute
    #[error("invalid initial route: {0}")]
    InvalidRoute(String),
    /// Refresh interval of zero
    #[error("refresh interval must be at least one second")]
    InvalidRefresh,
    /// Menu configuration rejected
    #[error(transparent)]
    Menu(#[from] MenuError),
    /// Session configuration rejected
    #[error(transparent)]
    Session(#[from] SessionConfigError),
    /// Configuration file unreadable
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
