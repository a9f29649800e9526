// ============================================================================
// ESTATE CLIENT - capa de estado del cliente de propiedades
// ============================================================================
// - Services: SOLO comunicación API (transport + envelope)
// - State: slices con transiciones puras + suscriptores
// - Stores: orquestan services y escriben su propio slice
// - ViewModels: cursor de paginación y controles derivados
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, CONFIG};
pub use error::{ClientError, ClientResult, TransportError};
pub use state::AppState;
pub use stores::{ListingStore, ReferenceDataStore, SessionStore};
pub use viewmodels::PaginationViewModel;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Panic hook + console logger. The embedding page builds its own `AppState`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Estate client ({}) - backend {}", CONFIG.environment, CONFIG.backend_url());
    Ok(())
}
