// Utils compartidos

pub mod environment;
pub mod i18n;
pub mod storage;

pub use environment::EnvironmentSignals;
pub use i18n::{t, TranslationTable};
pub use storage::{KeyValueStorage, MemoryStorage};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
