// ============================================================================
// STORAGE - Almacenamiento clave/valor (localStorage en el navegador)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::StorageError;

/// Almacenamiento clave/valor de strings, lectura síncrona.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Almacenamiento en memoria (tests y entornos sin localStorage)
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
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

/// localStorage del navegador
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        use gloo_storage::{LocalStorage, Storage};
        // LocalStorage::raw() hace panic sin window; comprobarlo antes
        web_sys::window()?.local_storage().ok()??;
        Some(LocalStorage::raw())
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::raw().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::raw().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|_| StorageError::Remove {
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").as_deref(), Some("v"));

        other.remove_item("k").unwrap();
        assert!(!storage.contains("k"));
    }
}
