// ============================================================================
// SESSION STORE - Token de sesión persistido
// ============================================================================
// Única fuente de verdad de "hay alguien logueado" antes de resolver la
// identidad. El token es opaco: solo importa su presencia.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TOKEN_STORAGE_KEY;
use crate::utils::KeyValueStorage;

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    token: Rc<RefCell<Option<String>>>,
}

impl SessionStore {
    /// Lee el token guardado de forma síncrona
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let token = storage
            .get_item(TOKEN_STORAGE_KEY)
            .filter(|t| !t.is_empty());
        if token.is_some() {
            log::info!("💾 [SESSION] Token encontrado en storage");
        }
        Self {
            storage,
            token: Rc::new(RefCell::new(token)),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Un token vacío equivale a no tener token
    pub fn save(&self, token: &str) {
        if token.is_empty() {
            self.clear();
            return;
        }
        *self.token.borrow_mut() = Some(token.to_string());
        if let Err(e) = self.storage.set_item(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ [SESSION] Error guardando token: {}", e);
        }
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
        if let Err(e) = self.storage.remove_item(TOKEN_STORAGE_KEY) {
            log::error!("❌ [SESSION] Error eliminando token: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[test]
    fn restores_token_on_init() {
        let storage = MemoryStorage::new().with_item(TOKEN_STORAGE_KEY, "abc");
        let store = SessionStore::new(Rc::new(storage));
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn empty_stored_token_counts_as_none() {
        let storage = MemoryStorage::new().with_item(TOKEN_STORAGE_KEY, "");
        let store = SessionStore::new(Rc::new(storage));
        assert!(!store.has_token());
    }

    #[test]
    fn save_and_clear_hit_storage() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Rc::new(storage.clone()));

        store.save("t1");
        assert_eq!(storage.get_item(TOKEN_STORAGE_KEY).as_deref(), Some("t1"));

        store.clear();
        assert!(store.token().is_none());
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
    }

    #[test]
    fn saving_empty_token_clears_session() {
        let storage = MemoryStorage::new().with_item(TOKEN_STORAGE_KEY, "abc");
        let store = SessionStore::new(Rc::new(storage.clone()));

        store.save("");
        assert!(!store.has_token());
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
    }
}
