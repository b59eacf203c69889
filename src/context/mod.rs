// ============================================================================
// CONTEXT MODULE - Idioma y tema
// ============================================================================

pub mod language;
pub mod theme;

pub use language::{LanguageContext, LocalizationProvider};
pub use theme::ThemeProvider;
