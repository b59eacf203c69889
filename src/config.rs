use serde::{Deserialize, Serialize};

/// Claves de localStorage usadas por el shell
pub const TOKEN_STORAGE_KEY: &str = "ai_touch_token";
pub const THEME_STORAGE_KEY: &str = "ai_touch_theme";
pub const LANGUAGE_STORAGE_KEY: &str = "ai_touch_language";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Timeout aplicado a cada llamada al backend (ms)
    pub request_timeout_ms: u32,
    /// Reintentos extra para la galería pública. La carga autenticada nunca se reintenta.
    pub gallery_retry_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8080".to_string(),
            backend_url_production: "https://api.aitouch.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            request_timeout_ms: 15_000,
            gallery_retry_attempts: 1,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            request_timeout_ms: option_env!("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            gallery_retry_attempts: option_env!("GALLERY_RETRY_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.gallery_retry_attempts),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:8080");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.aitouch.app");
    }

    #[test]
    fn defaults_retry_gallery_once() {
        let config = AppConfig::default();
        assert_eq!(config.gallery_retry_attempts, 1);
        assert!(config.request_timeout_ms > 0);
    }
}
