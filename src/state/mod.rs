// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod preference_store;
pub mod reactivity;
pub mod session_store;

pub use app_state::AppState;
pub use preference_store::PreferenceStore;
pub use reactivity::ReactiveState;
pub use session_store::SessionStore;
