pub mod identity_loader;
pub mod navigation_guard;
pub mod session_viewmodel;

pub use identity_loader::{IdentityLoader, IdentityOutcome, LoadResult};
pub use navigation_guard::{compute_rendered_page, default_landing, RenderedView};
pub use session_viewmodel::{LoadStatus, LoadTicket, SessionPhase, SessionViewModel};
