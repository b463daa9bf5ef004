//! In-memory session store.

use parking_lot::RwLock;
use shared_types::PermissionSet;

use crate::domain::SessionState;
use crate::ports::SessionStore;

/// Session store that lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: RwLock<SessionState>,
}

impl InMemorySessionStore {
    /// Empty, signed-out store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `state`.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }
}

impl SessionStore for InMemorySessionStore {
    fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    fn put_token(&self, token: String) {
        self.state.write().token = Some(token);
    }

    fn remove_token(&self) {
        self.state.write().token = None;
    }

    fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    fn put_is_authenticated(&self, value: bool) {
        self.state.write().is_authenticated = value;
    }

    fn remove_login_state(&self) {
        self.state.write().clear();
    }

    fn permission_ids(&self) -> PermissionSet {
        self.state.read().permission_ids.clone()
    }

    fn put_permission_ids(&self, ids: PermissionSet) {
        self.state.write().permission_ids = ids;
    }
}
