// ============================================================================
// AI TOUCH SHELL - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// Arquitectura MVVM:
// - Components/Hooks: render con Yew (solo wasm32)
// - ViewModels: ciclo de sesión + navegación protegida
// - Context: idioma y tema
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - DOM: estado global del documento (dir, lang, fuente, tema)
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod context;
pub mod dom;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if config::CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!(
        "🚀 AI Touch - Rust + Yew ({}, backend {})",
        config::CONFIG.environment,
        config::CONFIG.backend_url()
    );

    yew::Renderer::<components::App>::new().render();
}
