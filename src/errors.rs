use thiserror::Error;

/// Errores de comunicación con el backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// La petición no llegó al servidor.
    #[error("Network error: {0}")]
    Network(String),

    /// No se pudo construir la petición (serialización del cuerpo).
    #[error("Request build error: {0}")]
    Request(String),

    /// El servidor rechazó la credencial (401/403).
    #[error("Credential rejected by the server")]
    Unauthorized,

    /// Cualquier otro estado HTTP no exitoso.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// La respuesta no tenía el formato esperado.
    #[error("Parse error: {0}")]
    Parse(String),

    /// El servidor no respondió a tiempo.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl ApiError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Http {
                status,
                message: message.into(),
            },
        }
    }
}

/// Errores del almacenamiento clave/valor (localStorage).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to write key {key}")]
    Write { key: String },

    #[error("Failed to remove key {key}")]
    Remove { key: String },
}
