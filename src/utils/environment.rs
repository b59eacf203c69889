// ============================================================================
// ENVIRONMENT - Señales del navegador leídas una sola vez al arrancar
// ============================================================================

use crate::models::{Language, Theme};

/// Locale preferido y preferencia de esquema de color del sistema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvironmentSignals {
    pub locale: Option<String>,
    pub prefers_dark: bool,
}

impl EnvironmentSignals {
    pub fn preferred_language(&self) -> Language {
        self.locale
            .as_deref()
            .map(Language::from_locale)
            .unwrap_or_default()
    }

    pub fn preferred_theme(&self) -> Theme {
        if self.prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// navigator.language y `(prefers-color-scheme: dark)`
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let locale = window.navigator().language();
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        Self {
            locale,
            prefers_dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_signals_fall_back_to_english_light() {
        let signals = EnvironmentSignals::default();
        assert_eq!(signals.preferred_language(), Language::En);
        assert_eq!(signals.preferred_theme(), Theme::Light);
    }
}
