// ============================================================================
// DOCUMENT SURFACE - Estado global del documento (clases y atributos)
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Nodos del documento que el shell modifica
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentNode {
    /// `<html>`
    Root,
    /// `<body>`
    Body,
}

pub trait DocumentSurface {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str);
    fn add_class(&self, node: DocumentNode, class: &str);
    fn remove_class(&self, node: DocumentNode, class: &str);
}

#[derive(Default)]
struct MemoryDocumentInner {
    classes: HashMap<DocumentNode, BTreeSet<String>>,
    attributes: HashMap<(DocumentNode, String), String>,
}

/// Documento en memoria; los clones comparten contenido
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<RefCell<MemoryDocumentInner>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self, node: DocumentNode) -> Vec<String> {
        self.inner
            .borrow()
            .classes
            .get(&node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: DocumentNode, class: &str) -> bool {
        self.inner
            .borrow()
            .classes
            .get(&node)
            .map_or(false, |set| set.contains(class))
    }

    pub fn attribute(&self, node: DocumentNode, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attributes
            .get(&(node, name.to_string()))
            .cloned()
    }
}

impl DocumentSurface for MemoryDocument {
    fn set_attribute(&self, node: DocumentNode, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert((node, name.to_string()), value.to_string());
    }

    fn add_class(&self, node: DocumentNode, class: &str) {
        self.inner
            .borrow_mut()
            .classes
            .entry(node)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&self, node: DocumentNode, class: &str) {
        if let Some(set) = self.inner.borrow_mut().classes.get_mut(&node) {
            set.remove(class);
        }
    }
}
