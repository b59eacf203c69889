pub mod use_preferences;
pub mod use_shell;

pub use use_preferences::{use_preferences, UsePreferencesHandle};
pub use use_shell::{use_shell, LoginAttempt, SignUpAttempt, UseShellHandle};
