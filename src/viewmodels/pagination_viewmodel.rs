// ============================================================================
// PAGINATION VIEWMODEL - cursor de página, tamaño y filtros
// ============================================================================
// Owns what the user asked for (page, size, filters) and re-issues the page
// or search fetch whenever it changes. What the server answered lives in the
// listing store; controls are derived from that, not from the cursor.
// ============================================================================

use std::rc::Rc;

use crate::models::SearchFilters;
use crate::state::{ListingState, ReactiveState};
use crate::stores::ListingStore;
use crate::utils::constants::PAGE_WINDOW_RADIUS;
use crate::utils::viewport::scroll_to_top;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageCursor {
    pub current_page: u32,
    pub items_per_page: u32,
    pub filters: SearchFilters,
}

/// Everything a pager widget needs to draw itself
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PaginationControls {
    pub pages: Vec<u32>,
    pub current: u32,
    pub total_pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub visible: bool,
}

/// Pages shown around `current`: up to 2 on each side, clamped to `[1, total]`
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
    let end = current.saturating_add(PAGE_WINDOW_RADIUS).min(total);
    (start..=end).collect()
}

#[derive(Clone)]
pub struct PaginationViewModel {
    listings: ListingStore,
    cursor: ReactiveState<PageCursor>,
    on_page_change: Rc<dyn Fn()>,
}

impl PaginationViewModel {
    pub fn new(listings: ListingStore) -> Self {
        let cursor = PageCursor {
            current_page: 1,
            items_per_page: listings.default_limit(),
            filters: SearchFilters::default(),
        };
        Self {
            listings,
            cursor: ReactiveState::new(cursor),
            on_page_change: Rc::new(scroll_to_top),
        }
    }

    /// Replaces the default scroll-to-top run on every page change
    pub fn with_page_change_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_page_change = Rc::new(hook);
        self
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor.get()
    }

    pub fn cursor_state(&self) -> &ReactiveState<PageCursor> {
        &self.cursor
    }

    pub fn is_search_mode(&self) -> bool {
        self.cursor.with(|c| c.filters.is_active())
    }

    /// Fetches whatever the cursor points at
    pub async fn load(&self) {
        let cursor = self.cursor();
        log::debug!(
            "📄 Cargando página {} (tamaño {}, búsqueda: {})",
            cursor.current_page,
            cursor.items_per_page,
            cursor.filters.is_active()
        );
        if cursor.filters.is_active() {
            self.listings
                .search(cursor.current_page, Some(cursor.items_per_page), cursor.filters)
                .await
        } else {
            self.listings
                .fetch_paginated(cursor.current_page, Some(cursor.items_per_page))
                .await
        }
    }

    /// Returns false for page 0 or a page past the known last page
    pub async fn go_to_page(&self, page: u32) -> bool {
        let beyond_last = self
            .listings
            .state()
            .with(|s| s.pagination.as_ref().map_or(false, |p| page > p.total_pages));
        if page == 0 || beyond_last {
            log::warn!("⚠️ Página fuera de rango: {}", page);
            return false;
        }

        self.cursor.update(|c| c.current_page = page);
        (self.on_page_change)();
        self.load().await;
        true
    }

    pub async fn next_page(&self) -> bool {
        let target = self.listings.state().with(|s| {
            s.pagination
                .as_ref()
                .filter(|p| p.has_next_page)
                .map(|p| p.current_page.saturating_add(1))
        });
        match target {
            Some(page) => self.go_to_page(page).await,
            None => false,
        }
    }

    pub async fn previous_page(&self) -> bool {
        let target = self.listings.state().with(|s| {
            s.pagination
                .as_ref()
                .filter(|p| p.has_previous_page)
                .map(|p| p.current_page.saturating_sub(1))
        });
        match target {
            Some(page) => self.go_to_page(page).await,
            None => false,
        }
    }

    /// New page size restarts from page 1
    pub async fn set_items_per_page(&self, items_per_page: u32) {
        if items_per_page == 0 {
            log::warn!("⚠️ Tamaño de página inválido: 0");
            return;
        }
        self.cursor.update(|c| {
            c.items_per_page = items_per_page;
            c.current_page = 1;
        });
        self.load().await;
    }

    /// New filters restart from page 1
    pub async fn apply_filters(&self, filters: SearchFilters) {
        self.cursor.update(|c| {
            c.filters = filters;
            c.current_page = 1;
        });
        self.load().await;
    }

    pub async fn clear_filters(&self) {
        self.listings.clear_search();
        self.apply_filters(SearchFilters::default()).await;
    }

    pub fn controls(&self) -> PaginationControls {
        self.listings.state().with(controls_for)
    }
}

/// Controls for the page currently held by the listing store
pub fn controls_for(state: &ListingState) -> PaginationControls {
    match &state.pagination {
        Some(p) => PaginationControls {
            pages: page_window(p.current_page, p.total_pages),
            current: p.current_page,
            total_pages: p.total_pages,
            previous_enabled: p.has_previous_page,
            next_enabled: p.has_next_page,
            visible: p.total_pages > 1,
        },
        None => PaginationControls::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ApiClient, Method, PropertyService, StaticCredentials};
    use crate::test_support::{page_json, MockTransport, BASE_URL};
    use std::cell::Cell;

    const PAGINATED: &str = "/properties/paginated";

    fn setup() -> (Rc<MockTransport>, PaginationViewModel, Rc<Cell<u32>>) {
        let mock = Rc::new(MockTransport::new());
        let api = ApiClient::new(BASE_URL, mock.clone(), Rc::new(StaticCredentials::default()));
        let scrolls = Rc::new(Cell::new(0));
        let counter = scrolls.clone();
        let vm = PaginationViewModel::new(ListingStore::new(PropertyService::new(api)))
            .with_page_change_hook(move || counter.set(counter.get() + 1));
        (mock, vm, scrolls)
    }

    fn param(mock: &MockTransport, index: usize, key: &str) -> Option<String> {
        mock.requests()[index]
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    #[test]
    fn window_is_clamped_to_available_pages() {
        assert_eq!(page_window(1, 5), vec![1, 2, 3]);
        assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 5), vec![3, 4, 5]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(u32::MAX, u32::MAX), vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
    }

    #[tokio::test]
    async fn first_page_controls() {
        let (mock, vm, _) = setup();
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[1, 2, 3], 1, 5, 3));

        vm.load().await;

        let controls = vm.controls();
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert_eq!(controls.current, 1);
        assert!(!controls.previous_enabled);
        assert!(controls.next_enabled);
        assert!(controls.visible);
        assert_eq!(param(&mock, 0, "limit").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn single_page_hides_controls() {
        let (mock, vm, _) = setup();
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[1], 1, 1, 3));

        vm.load().await;
        assert!(!vm.controls().visible);
        assert_eq!(PaginationControls::default(), controls_for(&ListingState::default()));
    }

    #[tokio::test]
    async fn next_and_previous_follow_server_flags() {
        let (mock, vm, scrolls) = setup();
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[1, 2, 3], 1, 2, 3));
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[4, 5, 6], 2, 2, 3));

        vm.load().await;
        assert!(!vm.previous_page().await);
        assert_eq!(mock.request_count(), 1);

        assert!(vm.next_page().await);
        assert_eq!(vm.cursor().current_page, 2);
        assert_eq!(param(&mock, 1, "page").as_deref(), Some("2"));
        assert_eq!(scrolls.get(), 1);

        assert!(!vm.next_page().await);
        assert!(!vm.go_to_page(3).await);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn filters_switch_to_search_and_reset_page() {
        let (mock, vm, _) = setup();
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[1, 2, 3], 1, 4, 3));

        vm.go_to_page(3).await;
        vm.apply_filters(SearchFilters { type_id: Some(2), ..Default::default() }).await;

        assert!(vm.is_search_mode());
        assert_eq!(vm.cursor().current_page, 1);
        assert_eq!(param(&mock, 1, "page").as_deref(), Some("1"));
        assert_eq!(param(&mock, 1, "typeId").as_deref(), Some("2"));

        vm.clear_filters().await;
        assert!(!vm.is_search_mode());
        assert!(!vm.listings.is_search_mode());
        assert_eq!(param(&mock, 2, "typeId"), None);
    }

    #[tokio::test]
    async fn page_size_change_restarts_from_first_page() {
        let (mock, vm, _) = setup();
        mock.reply_ok(Method::Get, PAGINATED, page_json(&[1, 2, 3], 1, 4, 3));

        vm.go_to_page(2).await;
        vm.set_items_per_page(6).await;
        vm.set_items_per_page(0).await;

        assert_eq!(vm.cursor(), PageCursor { current_page: 1, items_per_page: 6, filters: SearchFilters::default() });
        assert_eq!(param(&mock, 1, "limit").as_deref(), Some("6"));
        assert_eq!(mock.request_count(), 2);
    }
}
