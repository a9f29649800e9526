use std::rc::Rc;

use crate::models::PersistedSession;
use crate::utils::storage::{load_from_storage, SessionStorage};

/// Source of the bearer token the API client attaches to each call
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token from the persisted session record on every call
#[derive(Clone)]
pub struct StoredCredentials {
    storage: Rc<dyn SessionStorage>,
    key: String,
}

impl StoredCredentials {
    pub fn new(storage: Rc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl CredentialProvider for StoredCredentials {
    fn bearer_token(&self) -> Option<String> {
        load_from_storage::<PersistedSession>(self.storage.as_ref(), &self.key)
            .filter(PersistedSession::is_well_formed)
            .map(|session| session.token)
    }
}

/// Fixed token, mostly for scripts and tests
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
