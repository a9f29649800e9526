// ============================================================================
// LISTING STATE - properties, current page, search filters
// ============================================================================
// Three read paths, each with its own loading/error pair so one in flight
// never clobbers another. Failures never clear cached data.
// ============================================================================

use crate::models::{PaginatedProperties, PaginationInfo, Property, SearchFilters};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RequestStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl RequestStatus {
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ListingState {
    pub properties: Vec<Property>,
    pub paginated_properties: Vec<Property>,
    pub pagination: Option<PaginationInfo>,
    pub search_filters: SearchFilters,
    pub selected_property: Option<Property>,
    /// `fetch_all`
    pub all: RequestStatus,
    /// `fetch_paginated` and `search`
    pub page: RequestStatus,
    /// `fetch_by_id`
    pub selected: RequestStatus,
}

impl ListingState {
    pub fn is_search_mode(&self) -> bool {
        self.search_filters.is_active()
    }

    /// First error among the read paths, for a single banner
    pub fn error(&self) -> Option<&str> {
        [&self.all, &self.page, &self.selected]
            .into_iter()
            .find_map(|status| status.error.as_deref())
    }

    pub fn is_loading(&self) -> bool {
        self.all.loading || self.page.loading || self.selected.loading
    }

    pub fn fetch_all_started(&mut self) {
        self.all.start();
    }

    pub fn fetch_all_succeeded(&mut self, properties: Vec<Property>) {
        self.properties = properties;
        self.all.succeed();
    }

    pub fn fetch_all_failed(&mut self, message: String) {
        self.all.fail(message);
    }

    pub fn page_started(&mut self) {
        self.page.start();
    }

    /// Filters are committed together with the page they produced, so search
    /// mode always describes `paginated_properties`.
    pub fn page_succeeded(&mut self, filters: SearchFilters, page: PaginatedProperties) {
        self.search_filters = filters;
        self.paginated_properties = page.data;
        self.pagination = Some(page.pagination);
        self.page.succeed();
    }

    pub fn page_failed(&mut self, message: String) {
        self.page.fail(message);
    }

    pub fn selected_started(&mut self) {
        self.selected.start();
    }

    pub fn selected_succeeded(&mut self, property: Property) {
        self.selected_property = Some(property);
        self.selected.succeed();
    }

    pub fn selected_failed(&mut self, message: String) {
        self.selected.fail(message);
    }

    pub fn set_selected_property(&mut self, property: Option<Property>) {
        self.selected_property = property;
    }

    pub fn clear_error(&mut self) {
        self.all.error = None;
        self.page.error = None;
        self.selected.error = None;
    }

    pub fn clear_search(&mut self) {
        self.search_filters = SearchFilters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::page_json;

    fn page(ids: &[i64], current: u32) -> PaginatedProperties {
        serde_json::from_value(page_json(ids, current, 4, 3)).unwrap()
    }

    #[test]
    fn page_failure_keeps_previous_page() {
        let mut state = ListingState::default();
        state.page_started();
        state.page_succeeded(SearchFilters::default(), page(&[4, 5, 6], 2));

        state.page_started();
        state.page_failed("HTTP 500: Internal Server Error".into());

        assert_eq!(state.paginated_properties.len(), 3);
        assert_eq!(state.pagination.as_ref().map(|p| p.current_page), Some(2));
        assert_eq!(state.error(), Some("HTTP 500: Internal Server Error"));
        assert!(!state.is_loading());
    }

    #[test]
    fn read_paths_track_status_independently() {
        let mut state = ListingState::default();
        state.fetch_all_started();
        state.page_started();
        state.fetch_all_failed("down".into());

        assert!(state.page.loading);
        assert!(state.page.error.is_none());
        assert_eq!(state.all.error.as_deref(), Some("down"));

        state.clear_error();
        assert!(state.error().is_none());
    }

    #[test]
    fn search_mode_follows_filters() {
        let filters = SearchFilters { status_id: Some(2), ..Default::default() };
        let mut state = ListingState::default();
        state.page_started();
        state.page_succeeded(filters, page(&[1], 1));
        assert!(state.is_search_mode());

        state.clear_search();
        assert!(!state.is_search_mode());
    }

    #[test]
    fn failed_search_keeps_the_filters_of_the_shown_page() {
        let mut state = ListingState::default();
        state.page_started();
        state.page_succeeded(SearchFilters::default(), page(&[1, 2, 3], 1));

        state.page_started();
        state.page_failed("Network error: offline".into());

        assert!(!state.is_search_mode());
        assert_eq!(state.paginated_properties.len(), 3);
    }
}
