// ============================================================================
// IDENTITY LOADER - Resuelve usuario, paquetes y galería pública
// ============================================================================
// No toca el estado: devuelve un resultado que el SessionViewModel aplica
// solo si su generación sigue vigente.
// ============================================================================

use std::rc::Rc;

use crate::errors::ApiError;
use crate::models::{GalleryImage, InitialData};
use crate::services::BackendApi;

/// Resultado de la parte autenticada de la carga
#[derive(Clone, Debug, PartialEq)]
pub enum IdentityOutcome {
    /// No había token: no se pidió identidad
    Anonymous,
    Resolved(InitialData),
    /// Cualquier fallo cuenta como credencial inválida
    Rejected(ApiError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadResult {
    pub identity: IdentityOutcome,
    pub gallery_images: Vec<GalleryImage>,
}

#[derive(Clone)]
pub struct IdentityLoader {
    api: Rc<dyn BackendApi>,
    gallery_retry_attempts: u32,
}

impl IdentityLoader {
    pub fn new(api: Rc<dyn BackendApi>, gallery_retry_attempts: u32) -> Self {
        Self {
            api,
            gallery_retry_attempts,
        }
    }

    /// Identidad y galería en paralelo; un fallo de galería nunca bloquea la carga
    pub async fn load(&self, token: Option<&str>) -> LoadResult {
        let (identity, gallery_images) =
            futures::join!(self.load_initial_data(token), self.load_public_gallery());
        LoadResult {
            identity,
            gallery_images,
        }
    }

    /// Sin reintentos: un fallo fuerza el logout
    pub async fn load_initial_data(&self, token: Option<&str>) -> IdentityOutcome {
        let token = match token {
            Some(token) => token,
            None => {
                log::info!("ℹ️ [LOADER] Sin token, se omite la carga de identidad");
                return IdentityOutcome::Anonymous;
            }
        };

        match self.api.get_initial_data(token).await {
            Ok(data) => {
                log::info!(
                    "✅ [LOADER] Identidad resuelta: {} ({} paquetes)",
                    data.user.email,
                    data.packages.len()
                );
                IdentityOutcome::Resolved(data)
            }
            Err(e) => {
                log::error!("❌ [LOADER] Error cargando datos iniciales: {}", e);
                IdentityOutcome::Rejected(e)
            }
        }
    }

    /// Galería pública con reintentos; si todo falla devuelve una lista vacía
    pub async fn load_public_gallery(&self) -> Vec<GalleryImage> {
        let attempts = self.gallery_retry_attempts + 1;
        for attempt in 1..=attempts {
            match self.api.get_public_gallery().await {
                Ok(response) => {
                    log::info!("🖼️ [LOADER] Galería cargada: {} imágenes", response.gallery_images.len());
                    return response.gallery_images;
                }
                Err(e) if attempt < attempts => {
                    log::warn!("⚠️ [LOADER] Error cargando galería (intento {}/{}): {}", attempt, attempts, e);
                }
                Err(e) => {
                    log::error!("❌ [LOADER] Galería no disponible: {}", e);
                }
            }
        }
        Vec::new()
    }
}
