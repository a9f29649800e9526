// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// One transport, one storage and one API client shared by the three stores.
// The client reads the bearer token from storage on every call, so a login
// or logout is picked up without rebuilding anything.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{ApiClient, AuthService, LookupService, PropertyService, StoredCredentials, Transport};
use crate::stores::{ListingStore, ReferenceDataStore, SessionStore};
use crate::utils::storage::SessionStorage;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub reference: ReferenceDataStore,
    pub listings: ListingStore,
    api: ApiClient,
}

impl AppState {
    pub fn new(config: &AppConfig, transport: Rc<dyn Transport>, storage: Rc<dyn SessionStorage>) -> Self {
        let credentials = Rc::new(StoredCredentials::new(storage.clone(), config.session_storage_key.clone()));
        let api = ApiClient::new(config.backend_url(), transport, credentials);

        Self {
            session: SessionStore::new(AuthService::new(api.clone()), storage, config.session_storage_key.clone()),
            reference: ReferenceDataStore::new(LookupService::new(api.clone())),
            listings: ListingStore::new(PropertyService::new(api.clone()))
                .with_default_limit(config.default_page_size),
            api,
        }
    }

    /// Global config + fetch transport + `window.sessionStorage`
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use crate::services::FetchTransport;
        use crate::utils::storage::BrowserSessionStorage;

        Self::new(
            &crate::config::CONFIG,
            Rc::new(FetchTransport::new()),
            Rc::new(BrowserSessionStorage),
        )
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Restores a persisted session. Returns whether the user is signed in.
    pub fn initialize(&self) -> bool {
        log::info!("🚀 Inicializando estado ({})", self.api.base_url());
        self.session.restore_session()
    }

    /// Drops in-memory state and every subscriber. Persisted session is kept.
    pub fn teardown(&self) {
        self.session.teardown();
        self.reference.teardown();
        self.listings.teardown();
    }
}
