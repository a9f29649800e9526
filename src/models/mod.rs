pub mod envelope;
pub mod auth;
pub mod lookup;
pub mod property;

pub use envelope::ApiEnvelope;
pub use auth::{LoginContent, LoginRequest, PersistedSession, User};
pub use lookup::{LookupItem, LookupKind, RawLookupItem};
pub use property::{
    slugify, CreatePropertyData, DeleteResult, ImageUpload, LookupRef, PaginatedProperties,
    PaginationInfo, Property, SearchFilters, UpdatePropertyData,
};
