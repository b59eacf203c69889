// ============================================================================
// PREFERENCE STORE - Idioma y tema persistidos
// ============================================================================

use std::rc::Rc;

use crate::config::{LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::models::{Language, Theme};
use crate::utils::KeyValueStorage;

#[derive(Clone)]
pub struct PreferenceStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl PreferenceStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load_language(&self) -> Option<Language> {
        self.storage
            .get_item(LANGUAGE_STORAGE_KEY)
            .and_then(|v| Language::parse(&v))
    }

    pub fn save_language(&self, language: Language) {
        if let Err(e) = self.storage.set_item(LANGUAGE_STORAGE_KEY, language.code()) {
            log::warn!("⚠️ [PREFS] No se pudo guardar el idioma: {}", e);
        }
    }

    /// Solo acepta "light" o "dark"; cualquier otro valor se ignora
    pub fn load_theme(&self) -> Option<Theme> {
        self.storage
            .get_item(THEME_STORAGE_KEY)
            .and_then(|v| Theme::parse(&v))
    }

    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("⚠️ [PREFS] No se pudo guardar el tema: {}", e);
        }
    }
}
