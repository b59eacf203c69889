// ============================================================================
// PRESENTATION ENVIRONMENT - Efectos de idioma y tema sobre el documento
// ============================================================================
// Idioma: atributos `lang`/`dir` de <html> y clase de fuente en <body>.
// Tema: clase `light`/`dark` en <html>.
// Cada concern toca atributos/clases disjuntos, así que pueden cambiar de
// forma independiente sin pisarse.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Language, Theme};

use super::surface::{DocumentNode, DocumentSurface};

/// Un único entorno compartido por los providers de idioma y tema
pub type SharedPresentation = Rc<RefCell<PresentationEnvironment>>;

pub struct PresentationEnvironment {
    surface: Box<dyn DocumentSurface>,
    applied_language: Option<Language>,
    applied_theme: Option<Theme>,
}

impl PresentationEnvironment {
    pub fn new(surface: Box<dyn DocumentSurface>) -> Self {
        Self {
            surface,
            applied_language: None,
            applied_theme: None,
        }
    }

    pub fn shared(surface: Box<dyn DocumentSurface>) -> SharedPresentation {
        Rc::new(RefCell::new(Self::new(surface)))
    }

    pub fn apply(&mut self, language: Language, theme: Theme) {
        self.apply_language(language);
        self.apply_theme(theme);
    }

    pub fn apply_language(&mut self, language: Language) {
        if self.applied_language == Some(language) {
            return;
        }
        self.surface.set_attribute(DocumentNode::Root, "lang", language.code());
        self.surface
            .set_attribute(DocumentNode::Root, "dir", language.direction().as_str());

        // Quitar la fuente de cualquier otro idioma antes de poner la actual
        for other in Language::ALL.iter().filter(|l| **l != language) {
            self.surface.remove_class(DocumentNode::Body, other.font_class());
        }
        self.surface.add_class(DocumentNode::Body, language.font_class());

        log::debug!("🌐 [I18N] Documento en {} ({})", language.code(), language.direction().as_str());
        self.applied_language = Some(language);
    }

    /// Quita la clase anterior y pone la nueva en la misma llamada síncrona:
    /// ningún frame ve ambas o ninguna.
    pub fn apply_theme(&mut self, theme: Theme) {
        if self.applied_theme == Some(theme) {
            return;
        }
        self.surface.remove_class(DocumentNode::Root, theme.toggled().as_str());
        self.surface.add_class(DocumentNode::Root, theme.as_str());

        log::debug!("🎨 [THEME] Documento en modo {}", theme.as_str());
        self.applied_theme = Some(theme);
    }
}
