use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("No se pudo acceder a sessionStorage")]
    Unavailable,
    #[error("Error escribiendo '{0}' en sessionStorage")]
    Write(String),
    #[error("Error eliminando '{0}' de sessionStorage")]
    Remove(String),
    #[error("Error serializando datos: {0}")]
    Serialize(String),
}

/// Key/value session storage (browser `sessionStorage` or an in-memory map).
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

pub fn save_to_storage<T: Serialize>(
    storage: &dyn SessionStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(key, &json)
}

/// Returns `None` when the key is absent or the stored JSON does not match `T`.
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn SessionStorage, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Entrada '{}' malformada en storage: {}", key, e);
            None
        }
    }
}

/// In-process storage for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSessionStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{SessionStorage, StorageError};
    use web_sys::{window, Storage};

    /// `window.sessionStorage`, cleared by the browser when the tab session ends
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserSessionStorage;

    impl BrowserSessionStorage {
        fn storage() -> Result<Storage, StorageError> {
            window()
                .and_then(|w| w.session_storage().ok())
                .flatten()
                .ok_or(StorageError::Unavailable)
        }
    }

    impl SessionStorage for BrowserSessionStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            Self::storage().ok()?.get_item(key).ok()?
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Write(key.to_string()))
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            Self::storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Remove(key.to_string()))
        }
    }
}
