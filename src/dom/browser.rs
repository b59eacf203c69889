// ============================================================================
// BROWSER DOCUMENT - DocumentSurface sobre web_sys
// ============================================================================

use web_sys::{Document, Element};

use super::surface::{DocumentNode, DocumentSurface};

/// Obtener document
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn element(node: DocumentNode) -> Option<Element> {
    let document = document()?;
    match node {
        DocumentNode::Root => document.document_element(),
        DocumentNode::Body => document.body().map(Element::from),
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserDocument;

impl DocumentSurface for BrowserDocument {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str) {
        if let Some(el) = element(node) {
            if el.set_attribute(name, value).is_err() {
                log::warn!("⚠️ [DOM] No se pudo establecer {}={}", name, value);
            }
        }
    }

    fn add_class(&self, node: DocumentNode, class: &str) {
        if let Some(el) = element(node) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&self, node: DocumentNode, class: &str) {
        if let Some(el) = element(node) {
            let _ = el.class_list().remove_1(class);
        }
    }
}
