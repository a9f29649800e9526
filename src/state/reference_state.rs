// ============================================================================
// REFERENCE STATE - types / locations / statuses
// ============================================================================

use crate::models::{LookupItem, LookupKind};

/// One value per lookup collection
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PerKind<T> {
    pub types: T,
    pub locations: T,
    pub statuses: T,
}

impl<T> PerKind<T> {
    pub fn get(&self, kind: LookupKind) -> &T {
        match kind {
            LookupKind::Types => &self.types,
            LookupKind::Locations => &self.locations,
            LookupKind::Statuses => &self.statuses,
        }
    }

    pub fn get_mut(&mut self, kind: LookupKind) -> &mut T {
        match kind {
            LookupKind::Types => &mut self.types,
            LookupKind::Locations => &mut self.locations,
            LookupKind::Statuses => &mut self.statuses,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ReferenceDataState {
    pub data: PerKind<Vec<LookupItem>>,
    pub loading: PerKind<bool>,
    pub error: PerKind<Option<String>>,
}

impl ReferenceDataState {
    pub fn items(&self, kind: LookupKind) -> &[LookupItem] {
        self.data.get(kind)
    }

    pub fn fetch_started(&mut self, kind: LookupKind) {
        *self.loading.get_mut(kind) = true;
        *self.error.get_mut(kind) = None;
    }

    /// All three flags in one transition, before any fetch resolves
    pub fn fetch_all_started(&mut self) {
        for kind in LookupKind::ALL {
            self.fetch_started(kind);
        }
    }

    pub fn fetch_succeeded(&mut self, kind: LookupKind, items: Vec<LookupItem>) {
        *self.data.get_mut(kind) = items;
        *self.loading.get_mut(kind) = false;
        *self.error.get_mut(kind) = None;
    }

    /// Last-known-good: data is left as it was
    pub fn fetch_failed(&mut self, kind: LookupKind, message: String) {
        *self.loading.get_mut(kind) = false;
        *self.error.get_mut(kind) = Some(message);
    }

    pub fn clear_errors(&mut self) {
        self.error = PerKind::default();
    }

    pub fn clear_lookups(&mut self) {
        self.data = PerKind::default();
    }

    pub fn is_loaded(&self, kind: LookupKind) -> bool {
        !self.data.get(kind).is_empty()
    }

    pub fn is_all_data_loaded(&self) -> bool {
        LookupKind::ALL.iter().all(|kind| self.is_loaded(*kind))
    }

    pub fn is_any_loading(&self) -> bool {
        LookupKind::ALL.iter().any(|kind| *self.loading.get(*kind))
    }

    pub fn has_any_error(&self) -> bool {
        LookupKind::ALL.iter().any(|kind| self.error.get(*kind).is_some())
    }
}
