// ============================================================================
// DOM MODULE - Estado global del documento
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod presentation;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;
pub use presentation::{PresentationEnvironment, SharedPresentation};
pub use surface::{DocumentNode, DocumentSurface, MemoryDocument};
