// ============================================================================
// LISTING STORE - properties (all / paginated / search / by id) + mutations
// ============================================================================
// Create/update/delete never write to the store: callers re-fetch afterwards
// so server-side normalization stays the only source of truth.
// ============================================================================

use crate::error::{ClientError, ClientResult};
use crate::models::{CreatePropertyData, Property, SearchFilters, UpdatePropertyData};
use crate::services::PropertyService;
use crate::state::{ListingState, ReactiveState};
use crate::utils::constants::DEFAULT_PAGE_LIMIT;

#[derive(Clone)]
pub struct ListingStore {
    state: ReactiveState<ListingState>,
    properties: PropertyService,
    default_limit: u32,
}

impl ListingStore {
    pub fn new(properties: PropertyService) -> Self {
        Self {
            state: ReactiveState::new(ListingState::default()),
            properties,
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Page size used when `fetch_paginated`/`search` get no explicit limit
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn state(&self) -> &ReactiveState<ListingState> {
        &self.state
    }

    pub fn snapshot(&self) -> ListingState {
        self.state.get()
    }

    pub fn is_search_mode(&self) -> bool {
        self.state.with(ListingState::is_search_mode)
    }

    pub async fn fetch_all(&self) {
        self.state.update(ListingState::fetch_all_started);
        match self.properties.get_all().await {
            Ok(properties) => {
                log::info!("✅ {} propiedades obtenidas", properties.len());
                self.state.update(|s| s.fetch_all_succeeded(properties));
            }
            Err(e) => {
                log::error!("❌ Error obteniendo propiedades: {}", e);
                self.state.update(|s| s.fetch_all_failed(e.to_string()));
            }
        }
    }

    /// 1-indexed page; `limit` defaults to the store's page size (3)
    pub async fn fetch_paginated(&self, page: u32, limit: Option<u32>) {
        self.load_page(page, limit, SearchFilters::default()).await
    }

    /// Same contract as `fetch_paginated`, with filters sent to the backend
    pub async fn search(&self, page: u32, limit: Option<u32>, filters: SearchFilters) {
        self.load_page(page, limit, filters).await
    }

    pub async fn fetch_by_id(&self, id: i64) {
        self.state.update(ListingState::selected_started);
        match self.properties.get_by_id(id).await {
            Ok(property) => self.state.update(|s| s.selected_succeeded(property)),
            Err(e) => {
                log::error!("❌ Error obteniendo propiedad {}: {}", id, e);
                self.state.update(|s| s.selected_failed(e.to_string()));
            }
        }
    }

    /// Validates locally first; an invalid payload never reaches the network.
    pub async fn create(&self, data: CreatePropertyData) -> ClientResult<Property> {
        let data = data.with_generated_slug();
        data.validate()?;
        let created = self.properties.create(&data).await.map_err(|e| {
            log::error!("❌ Error creando propiedad: {}", e);
            e
        })?;
        log::info!("✅ Propiedad creada: {} ({})", created.property_title, created.property_id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, data: UpdatePropertyData) -> ClientResult<Property> {
        data.validate()?;
        self.properties.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<bool> {
        self.properties.delete(id).await
    }

    pub fn set_selected_property(&self, property: Option<Property>) {
        self.state.update(|s| s.set_selected_property(property));
    }

    pub fn clear_selected_property(&self) {
        self.set_selected_property(None);
    }

    pub fn clear_error(&self) {
        self.state.update(ListingState::clear_error);
    }

    pub fn clear_search(&self) {
        self.state.update(ListingState::clear_search);
    }

    pub fn teardown(&self) {
        self.state.clear_subscribers();
        self.state.set(ListingState::default());
    }

    async fn load_page(&self, page: u32, limit: Option<u32>, filters: SearchFilters) {
        let limit = limit.unwrap_or(self.default_limit);
        self.state.update(ListingState::page_started);

        let result = match validate_page(page, limit) {
            Ok(()) if filters.is_active() => self.properties.search(page, limit, &filters).await,
            Ok(()) => self.properties.get_paginated(page, limit).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(page_data) => {
                log::info!(
                    "📄 Página {}/{} ({} propiedades)",
                    page_data.pagination.current_page,
                    page_data.pagination.total_pages,
                    page_data.data.len()
                );
                self.state.update(|s| s.page_succeeded(filters, page_data));
            }
            Err(e) => {
                log::error!("❌ Error obteniendo página {}: {}", page, e);
                self.state.update(|s| s.page_failed(e.to_string()));
            }
        }
    }
}

fn validate_page(page: u32, limit: u32) -> ClientResult<()> {
    if page == 0 {
        return Err(ClientError::Validation("Page numbers start at 1".into()));
    }
    if limit == 0 {
        return Err(ClientError::Validation("Page size must be greater than 0".into()));
    }
    Ok(())
}
