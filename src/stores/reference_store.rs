// ============================================================================
// REFERENCE DATA STORE - types / locations / statuses
// ============================================================================

use futures::join;

use crate::models::{LookupItem, LookupKind};
use crate::services::LookupService;
use crate::state::{ReactiveState, ReferenceDataState};

#[derive(Clone)]
pub struct ReferenceDataStore {
    state: ReactiveState<ReferenceDataState>,
    lookups: LookupService,
}

impl ReferenceDataStore {
    pub fn new(lookups: LookupService) -> Self {
        Self {
            state: ReactiveState::new(ReferenceDataState::default()),
            lookups,
        }
    }

    pub fn state(&self) -> &ReactiveState<ReferenceDataState> {
        &self.state
    }

    pub fn snapshot(&self) -> ReferenceDataState {
        self.state.get()
    }

    pub fn items(&self, kind: LookupKind) -> Vec<LookupItem> {
        self.state.with(|s| s.items(kind).to_vec())
    }

    pub fn is_all_data_loaded(&self) -> bool {
        self.state.with(ReferenceDataState::is_all_data_loaded)
    }

    pub async fn load(&self, kind: LookupKind) {
        self.state.update(|s| s.fetch_started(kind));
        self.resolve(kind).await;
    }

    pub async fn load_types(&self) {
        self.load(LookupKind::Types).await
    }

    pub async fn load_locations(&self) {
        self.load(LookupKind::Locations).await
    }

    pub async fn load_statuses(&self) {
        self.load(LookupKind::Statuses).await
    }

    /// Flags all three as loading in one transition, then fetches them
    /// concurrently; each result lands on its own slice.
    pub async fn load_all(&self) {
        log::info!("📋 Cargando datos de referencia...");
        self.state.update(ReferenceDataState::fetch_all_started);
        join!(
            self.resolve(LookupKind::Types),
            self.resolve(LookupKind::Locations),
            self.resolve(LookupKind::Statuses),
        );
    }

    /// `load_all` only when some collection is still empty
    pub async fn ensure_loaded(&self) -> bool {
        if self.is_all_data_loaded() {
            return false;
        }
        self.load_all().await;
        true
    }

    pub fn clear_errors(&self) {
        self.state.update(ReferenceDataState::clear_errors);
    }

    pub fn clear_lookups(&self) {
        self.state.update(ReferenceDataState::clear_lookups);
    }

    pub fn teardown(&self) {
        self.state.clear_subscribers();
        self.state.set(ReferenceDataState::default());
    }

    async fn resolve(&self, kind: LookupKind) {
        match self.lookups.fetch(kind).await {
            Ok(items) => {
                log::info!("✅ {:?}: {} elementos", kind, items.len());
                self.state.update(|s| s.fetch_succeeded(kind, items));
            }
            Err(e) => {
                self.state.update(|s| s.fetch_failed(kind, e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ApiClient, Method, StaticCredentials};
    use crate::state::PerKind;
    use crate::test_support::{MockTransport, BASE_URL};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (Rc<MockTransport>, ReferenceDataStore) {
        let mock = Rc::new(MockTransport::new());
        let api = ApiClient::new(BASE_URL, mock.clone(), Rc::new(StaticCredentials::default()));
        (mock, ReferenceDataStore::new(LookupService::new(api)))
    }

    fn types() -> Value {
        json!([{"_id": "x", "typeId": 1, "typeDescription": "House", "__v": 0}])
    }

    fn locations() -> Value {
        json!([
            {"_id": "y", "locationId": 1, "locationDescription": "Colombo", "__v": 0},
            {"_id": "z", "locationId": 2, "locationDescription": "Galle", "__v": 0}
        ])
    }

    fn statuses() -> Value {
        json!([{"_id": "w", "statusId": 1, "statusDescription": "For Sale", "__v": 0}])
    }

    #[tokio::test]
    async fn load_all_flags_everything_before_any_fetch_resolves() {
        let (mock, store) = setup();
        mock.reply_ok(Method::Get, "/types", types());
        mock.reply_ok(Method::Get, "/locations", locations());
        mock.reply_ok(Method::Get, "/statuses", statuses());
        store.state().update(|s| s.error.types = Some("stale".into()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.state().subscribe(move |s: &ReferenceDataState| sink.borrow_mut().push(s.clone()));

        store.load_all().await;

        let first = seen.borrow()[0].clone();
        assert_eq!(first.loading, PerKind { types: true, locations: true, statuses: true });
        assert_eq!(first.error, PerKind::default());
        assert!(first.data.types.is_empty());

        let done = store.snapshot();
        assert!(done.is_all_data_loaded());
        assert!(!done.is_any_loading());
        assert_eq!(done.data.locations[1].description, "Galle");
        assert_eq!(seen.borrow().len(), 4);
    }

    #[tokio::test]
    async fn one_failure_does_not_block_the_others() {
        let (mock, store) = setup();
        mock.fail(Method::Get, "/types", "connection reset");
        mock.reply_ok(Method::Get, "/locations", locations());
        mock.reply_ok(Method::Get, "/statuses", statuses());

        store.load_all().await;

        let state = store.snapshot();
        assert!(state.error.types.is_some());
        assert!(state.error.locations.is_none());
        assert_eq!(state.data.locations.len(), 2);
        assert_eq!(state.data.statuses.len(), 1);
        assert!(!state.is_any_loading());
    }

    #[tokio::test]
    async fn concurrent_individual_loads_resolve_independently() {
        let (mock, store) = setup();
        mock.fail(Method::Get, "/types", "timeout");
        mock.reply_ok(Method::Get, "/locations", locations());

        join!(store.load_types(), store.load_locations());

        let state = store.snapshot();
        assert_eq!(
            state.error.types.as_deref(),
            Some("Failed to fetch property types: Network error: timeout")
        );
        assert!(state.error.locations.is_none());
        assert_eq!(state.data.locations.len(), 2);
    }

    #[tokio::test]
    async fn failure_keeps_stale_data() {
        let (mock, store) = setup();
        mock.reply_ok(Method::Get, "/statuses", statuses());
        mock.reply_code(Method::Get, "/statuses", "05", "Statuses unavailable");

        store.load_statuses().await;
        store.load_statuses().await;

        let state = store.snapshot();
        assert_eq!(state.data.statuses.len(), 1);
        assert_eq!(
            state.error.statuses.as_deref(),
            Some("Failed to fetch statuses: Statuses unavailable")
        );
    }

    #[tokio::test]
    async fn individual_load_only_touches_its_own_flags() {
        let (mock, store) = setup();
        mock.reply_ok(Method::Get, "/types", types());
        store.state().update(|s| s.error.locations = Some("earlier".into()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.state().subscribe(move |s: &ReferenceDataState| sink.borrow_mut().push(s.loading.clone()));

        store.load_types().await;

        assert_eq!(seen.borrow()[0], PerKind { types: true, locations: false, statuses: false });
        assert_eq!(store.snapshot().error.locations.as_deref(), Some("earlier"));
    }

    #[tokio::test]
    async fn ensure_loaded_skips_when_everything_is_present() {
        let (mock, store) = setup();
        mock.reply_ok(Method::Get, "/types", types());
        mock.reply_ok(Method::Get, "/locations", locations());
        mock.reply_ok(Method::Get, "/statuses", statuses());

        assert!(store.ensure_loaded().await);
        assert_eq!(mock.request_count(), 3);
        assert!(!store.ensure_loaded().await);
        assert_eq!(mock.request_count(), 3);
    }
}
