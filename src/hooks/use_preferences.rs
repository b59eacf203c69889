// ============================================================================
// USE PREFERENCES HOOK - Providers de idioma y tema
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::context::{LanguageContext, LocalizationProvider, ThemeProvider};
use crate::dom::{BrowserDocument, PresentationEnvironment};
use crate::models::Theme;
use crate::state::PreferenceStore;
use crate::utils::{BrowserStorage, EnvironmentSignals, KeyValueStorage, TranslationTable};

#[derive(Clone)]
pub struct UsePreferencesHandle {
    pub language: LanguageContext,
    pub theme: Theme,
    pub toggle_language: Callback<()>,
    pub toggle_theme: Callback<()>,
}

#[hook]
pub fn use_preferences() -> UsePreferencesHandle {
    let providers = use_memo((), |_| {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(BrowserStorage);
        let preferences = PreferenceStore::new(storage);
        // Señales del entorno: se leen una vez, nunca se vuelven a consultar
        let signals = EnvironmentSignals::from_browser();
        let presentation = PresentationEnvironment::shared(Box::new(BrowserDocument));

        let localization = LocalizationProvider::new(
            preferences.clone(),
            &signals,
            TranslationTable::builtin(),
            presentation.clone(),
        );
        let theme = ThemeProvider::new(preferences, &signals, presentation);
        (localization, theme)
    });
    let force_update = use_force_update();

    {
        let providers = providers.clone();
        use_effect_with((), move |_| {
            let (localization, theme) = &*providers;
            let on_language = force_update.clone();
            localization.subscribe(move |_| on_language.force_update());
            theme.subscribe(move |_| force_update.force_update());
            || ()
        });
    }

    let (localization, theme) = &*providers;

    let toggle_language = {
        let localization = localization.clone();
        Callback::from(move |_| localization.toggle_language())
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.toggle())
    };

    UsePreferencesHandle {
        language: localization.context(),
        theme: theme.theme(),
        toggle_language,
        toggle_theme,
    }
}
