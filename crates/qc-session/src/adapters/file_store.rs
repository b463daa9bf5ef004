//! Session store persisted as a JSON file.
//!
//! The file is rewritten after every change so a restarted console picks
//! up where it left off. A failed write is logged and the in-memory state
//! kept; callers are never interrupted by disk trouble.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use shared_types::PermissionSet;
use tracing::{debug, warn};

use crate::domain::{SessionError, SessionState};
use crate::ports::SessionStore;

/// File-backed session store.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    state: RwLock<SessionState>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file means a signed-out session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                SessionError::Parse(format!("{}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => SessionState::default(),
            Err(e) => {
                return Err(SessionError::Parse(format!("{}: {}", path.display(), e)));
            }
        };
        debug!(path = %path.display(), "Session store opened");

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write();
        apply(&mut state);
        if let Err(e) = self.persist(&state) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist session state");
        }
    }

    fn persist(&self, state: &SessionState) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(state)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    fn put_token(&self, token: String) {
        self.update(|state| state.token = Some(token));
    }

    fn remove_token(&self) {
        self.update(|state| state.token = None);
    }

    fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    fn put_is_authenticated(&self, value: bool) {
        self.update(|state| state.is_authenticated = value);
    }

    fn remove_login_state(&self) {
        self.update(SessionState::clear);
    }

    fn permission_ids(&self) -> PermissionSet {
        self.state.read().permission_ids.clone()
    }

    fn put_permission_ids(&self, ids: PermissionSet) {
        self.update(|state| state.permission_ids = ids);
    }
}
