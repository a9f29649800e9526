// ============================================================================
// SESSION STATE - Estado de autenticación
// ============================================================================
// Anonymous -> Authenticating -> Authenticated, Authenticated -> Anonymous.
// `is_authenticated` is only ever written together with `token`.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::{PersistedSession, User};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> AuthPhase {
        match (self.loading, self.is_authenticated) {
            (true, _) => AuthPhase::Authenticating,
            (false, true) => AuthPhase::Authenticated,
            (false, false) => AuthPhase::Anonymous,
        }
    }

    pub fn login_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, session: PersistedSession) {
        self.authenticate(session);
        self.loading = false;
        self.error = None;
    }

    pub fn login_failed(&mut self, message: String) {
        self.clear_identity();
        self.loading = false;
        self.error = Some(message);
    }

    /// Restore from storage: no network, loading/error untouched
    pub fn restored(&mut self, session: PersistedSession) {
        self.authenticate(session);
    }

    pub fn logged_out(&mut self) {
        *self = Self::default();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Snapshot of what should be in session storage
    pub fn persisted(&self) -> Option<PersistedSession> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some(PersistedSession {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }

    fn authenticate(&mut self, session: PersistedSession) {
        self.is_authenticated = true;
        self.token = Some(session.token);
        self.user = Some(session.user);
    }

    fn clear_identity(&mut self) {
        self.is_authenticated = false;
        self.token = None;
        self.user = None;
    }
}
