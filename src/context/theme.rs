// ============================================================================
// THEME PROVIDER - Tema claro/oscuro
// ============================================================================

use crate::dom::SharedPresentation;
use crate::models::Theme;
use crate::state::{PreferenceStore, ReactiveState};
use crate::utils::EnvironmentSignals;

#[derive(Clone)]
pub struct ThemeProvider {
    theme: ReactiveState<Theme>,
    preferences: PreferenceStore,
    presentation: SharedPresentation,
}

impl ThemeProvider {
    /// Tema inicial: preferencia guardada > `prefers-color-scheme` > claro.
    /// Se aplica al documento pero no se guarda.
    pub fn new(
        preferences: PreferenceStore,
        signals: &EnvironmentSignals,
        presentation: SharedPresentation,
    ) -> Self {
        let initial = preferences
            .load_theme()
            .unwrap_or_else(|| signals.preferred_theme());
        log::info!("🎨 [THEME] Tema inicial: {}", initial.as_str());

        presentation.borrow_mut().apply_theme(initial);

        Self {
            theme: ReactiveState::new(initial),
            preferences,
            presentation,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme().toggled());
    }

    pub fn set_theme(&self, theme: Theme) {
        if self.theme() == theme {
            return;
        }
        log::info!("🎨 [THEME] Cambio de tema → {}", theme.as_str());

        self.preferences.save_theme(theme);
        self.presentation.borrow_mut().apply_theme(theme);
        self.theme.set(theme);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Theme) + 'static,
    {
        self.theme.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEME_STORAGE_KEY;
    use crate::context::LocalizationProvider;
    use crate::dom::{DocumentNode, MemoryDocument, PresentationEnvironment};
    use crate::models::Language;
    use crate::utils::i18n::TranslationTable;
    use crate::utils::{KeyValueStorage, MemoryStorage};
    use std::rc::Rc;

    fn provider(storage: &MemoryStorage, prefers_dark: bool) -> (ThemeProvider, MemoryDocument) {
        let document = MemoryDocument::new();
        let signals = EnvironmentSignals {
            locale: None,
            prefers_dark,
        };
        let provider = ThemeProvider::new(
            PreferenceStore::new(Rc::new(storage.clone())),
            &signals,
            PresentationEnvironment::shared(Box::new(document.clone())),
        );
        (provider, document)
    }

    #[test]
    fn initial_theme_resolution_order() {
        let stored = MemoryStorage::new().with_item(THEME_STORAGE_KEY, "light");
        assert_eq!(provider(&stored, true).0.theme(), Theme::Light);

        let empty = MemoryStorage::new();
        let (dark, document) = provider(&empty, true);
        assert_eq!(dark.theme(), Theme::Dark);
        assert!(document.has_class(DocumentNode::Root, "dark"));
        assert!(!empty.contains(THEME_STORAGE_KEY));

        assert_eq!(provider(&MemoryStorage::new(), false).0.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_and_swaps_single_class() {
        let storage = MemoryStorage::new();
        let (theme, document) = provider(&storage, false);

        theme.toggle();
        assert_eq!(theme.theme(), Theme::Dark);
        assert_eq!(storage.get_item(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(document.classes(DocumentNode::Root), vec!["dark".to_string()]);

        theme.toggle();
        assert_eq!(storage.get_item(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(document.classes(DocumentNode::Root), vec!["light".to_string()]);
    }

    #[test]
    fn theme_and_language_share_the_document_without_interference() {
        let storage = MemoryStorage::new();
        let document = MemoryDocument::new();
        let presentation = PresentationEnvironment::shared(Box::new(document.clone()));
        let signals = EnvironmentSignals::default();
        let prefs = PreferenceStore::new(Rc::new(storage));

        let language = LocalizationProvider::new(
            prefs.clone(),
            &signals,
            TranslationTable::builtin(),
            presentation.clone(),
        );
        let theme = ThemeProvider::new(prefs, &signals, presentation);

        language.set_language(Language::Ar);
        theme.toggle();
        language.set_language(Language::En);

        assert_eq!(document.classes(DocumentNode::Root), vec!["dark".to_string()]);
        assert_eq!(document.classes(DocumentNode::Body), vec!["font-sans".to_string()]);
        assert_eq!(document.attribute(DocumentNode::Root, "dir").as_deref(), Some("ltr"));
    }
}
