// ============================================================================
// APP STATE - Estado global del shell
// ============================================================================
// Página solicitada, identidad resuelta, datos cargados, flag de carga y
// contador de generación de cargas. Solo el SessionViewModel muta la
// identidad; el resto del shell la lee.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{GalleryImage, Package, Page, User};

#[derive(Clone)]
pub struct AppState {
    requested_page: Rc<Cell<Page>>,
    current_user: Rc<RefCell<Option<User>>>,
    packages: Rc<RefCell<Vec<Package>>>,
    gallery_images: Rc<RefCell<Vec<GalleryImage>>>,
    is_loading: Rc<Cell<bool>>,
    load_generation: Rc<Cell<u64>>,

    // Reactividad: callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Estado inicial: cargando, sin identidad, Home solicitada
    pub fn new() -> Self {
        Self {
            requested_page: Rc::new(Cell::new(Page::Home)),
            current_user: Rc::new(RefCell::new(None)),
            packages: Rc::new(RefCell::new(Vec::new())),
            gallery_images: Rc::new(RefCell::new(Vec::new())),
            is_loading: Rc::new(Cell::new(true)),
            load_generation: Rc::new(Cell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn requested_page(&self) -> Page {
        self.requested_page.get()
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn has_user(&self) -> bool {
        self.current_user.borrow().is_some()
    }

    pub fn packages(&self) -> Vec<Package> {
        self.packages.borrow().clone()
    }

    pub fn gallery_images(&self) -> Vec<GalleryImage> {
        self.gallery_images.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn load_generation(&self) -> u64 {
        self.load_generation.get()
    }

    /// Invalida cualquier carga en curso y devuelve la nueva generación
    pub(crate) fn next_generation(&self) -> u64 {
        let next = self.load_generation.get().wrapping_add(1);
        self.load_generation.set(next);
        next
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        self.load_generation.get() == generation
    }

    pub(crate) fn set_requested_page(&self, page: Page) {
        self.requested_page.set(page);
    }

    pub(crate) fn set_current_user(&self, user: Option<User>) {
        *self.current_user.borrow_mut() = user;
    }

    pub(crate) fn set_packages(&self, packages: Vec<Package>) {
        *self.packages.borrow_mut() = packages;
    }

    pub(crate) fn set_gallery_images(&self, images: Vec<GalleryImage>) {
        *self.gallery_images.borrow_mut() = images;
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
