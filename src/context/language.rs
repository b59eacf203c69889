// ============================================================================
// LOCALIZATION PROVIDER - Idioma activo + función de traducción
// ============================================================================
// Idioma inicial: preferencia guardada > locale del navegador > inglés.
// Cada cambio de idioma se persiste y se aplica al documento (lang, dir,
// clase de fuente).
// ============================================================================

use std::fmt::Display;
use std::rc::Rc;

use crate::dom::SharedPresentation;
use crate::models::{Language, TextDirection};
use crate::state::{PreferenceStore, ReactiveState};
use crate::utils::i18n::{self, TranslationTable};
use crate::utils::EnvironmentSignals;

#[derive(Clone)]
pub struct LocalizationProvider {
    language: ReactiveState<Language>,
    table: Rc<TranslationTable>,
    preferences: PreferenceStore,
    presentation: SharedPresentation,
}

impl LocalizationProvider {
    pub fn new(
        preferences: PreferenceStore,
        signals: &EnvironmentSignals,
        table: Rc<TranslationTable>,
        presentation: SharedPresentation,
    ) -> Self {
        let initial = preferences
            .load_language()
            .unwrap_or_else(|| signals.preferred_language());
        log::info!("🌐 [I18N] Idioma inicial: {}", initial.code());

        presentation.borrow_mut().apply_language(initial);

        Self {
            language: ReactiveState::new(initial),
            table,
            preferences,
            presentation,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    pub fn set_language(&self, language: Language) {
        if self.language() == language {
            return;
        }
        log::info!("🌐 [I18N] Cambio de idioma: {} → {}", self.language().code(), language.code());

        self.preferences.save_language(language);
        self.presentation.borrow_mut().apply_language(language);
        self.language.set(language);
    }

    /// Botón de idioma del header
    pub fn toggle_language(&self) {
        self.set_language(self.language().toggled());
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, args: &[&dyn Display]) -> String {
        i18n::t(&self.table, key, self.language(), args)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Language) + 'static,
    {
        self.language.subscribe(callback);
    }

    /// Snapshot para pasar por props a los componentes
    pub fn context(&self) -> LanguageContext {
        LanguageContext {
            language: self.language(),
            table: self.table.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LanguageContext {
    pub language: Language,
    table: Rc<TranslationTable>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.table, &other.table)
    }
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> String {
        i18n::t(&self.table, key, self.language, &[])
    }

    pub fn t_with(&self, key: &str, args: &[&dyn Display]) -> String {
        i18n::t(&self.table, key, self.language, args)
    }

    pub fn is_rtl(&self) -> bool {
        self.language.direction() == TextDirection::Rtl
    }
}
