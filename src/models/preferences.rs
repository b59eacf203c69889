// ============================================================================
// PREFERENCES - Idioma y tema del usuario
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Language {
    En,
    Ar,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// `ar`, `ar-EG`, ... → árabe; cualquier otro locale → inglés
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale.split('-').next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ar") {
            Language::Ar
        } else {
            Language::En
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// Clase CSS de fuente aplicada al body
    pub fn font_class(self) -> &'static str {
        match self {
            Language::Ar => "font-cairo",
            Language::En => "font-sans",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Etiqueta del botón para cambiar al otro idioma
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "العربية",
            Language::Ar => "English",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_maps_to_language() {
        assert_eq!(Language::from_locale("ar-EG"), Language::Ar);
        assert_eq!(Language::from_locale("AR"), Language::Ar);
        assert_eq!(Language::from_locale("en-US"), Language::En);
        assert_eq!(Language::from_locale("fr"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
        assert_ne!(Language::Ar.font_class(), Language::En.font_class());
    }

    #[test]
    fn theme_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
