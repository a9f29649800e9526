pub mod session_store;
pub mod reference_store;
pub mod listing_store;

pub use session_store::SessionStore;
pub use reference_store::ReferenceDataStore;
pub use listing_store::ListingStore;
