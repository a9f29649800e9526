// ============================================================================
// SESSION STORE - login / logout / restore, synced with session storage
// ============================================================================

use std::rc::Rc;

use crate::models::PersistedSession;
use crate::services::AuthService;
use crate::state::{ReactiveState, SessionState};
use crate::utils::storage::{load_from_storage, save_to_storage, SessionStorage};

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<SessionState>,
    auth: AuthService,
    storage: Rc<dyn SessionStorage>,
    storage_key: String,
}

impl SessionStore {
    pub fn new(auth: AuthService, storage: Rc<dyn SessionStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            state: ReactiveState::new(SessionState::default()),
            auth,
            storage,
            storage_key: storage_key.into(),
        }
    }

    pub fn state(&self) -> &ReactiveState<SessionState> {
        &self.state
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    /// Concurrent calls are not de-duplicated: whichever resolves last wins.
    pub async fn login(&self, username: &str, password: &str) {
        log::info!("🔐 Login para usuario: {}", username);
        self.state.update(SessionState::login_started);

        let outcome = match self.auth.login(username, password).await {
            Ok(content) => {
                let session = PersistedSession::from(content);
                save_to_storage(self.storage.as_ref(), &self.storage_key, &session)
                    .map(|_| session)
                    .map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(session) => {
                log::info!("✅ Login correcto: {} ({})", session.user.username, session.user.user_type);
                self.state.update(|s| s.login_succeeded(session));
            }
            Err(message) => {
                log::error!("❌ Login fallido: {}", message);
                self.remove_persisted();
                self.state.update(|s| s.login_failed(message));
            }
        }
    }

    /// Never fails: storage errors are logged and the in-memory session is cleared anyway.
    pub fn logout(&self) {
        log::info!("👋 Logout - limpiando sesión");
        self.remove_persisted();
        self.state.update(SessionState::logged_out);
    }

    /// Restores a persisted session without a network call.
    /// Returns whether the store ends up authenticated from that record.
    pub fn restore_session(&self) -> bool {
        let Some(session) = load_from_storage::<PersistedSession>(self.storage.as_ref(), &self.storage_key)
            .filter(PersistedSession::is_well_formed)
        else {
            log::info!("ℹ️ No hay sesión guardada");
            return false;
        };

        if self.state.with(|s| s.persisted().as_ref() == Some(&session) && s.is_authenticated) {
            return true;
        }

        log::info!("✅ Sesión restaurada: {}", session.user.username);
        self.state.update(|s| s.restored(session));
        true
    }

    pub fn clear_error(&self) {
        self.state.update(SessionState::clear_error);
    }

    /// Drops in-memory state and subscribers, leaves storage alone
    pub fn teardown(&self) {
        self.state.clear_subscribers();
        self.state.set(SessionState::default());
    }

    fn remove_persisted(&self) {
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            log::warn!("⚠️ Error eliminando sesión guardada: {}", e);
        }
    }
}
