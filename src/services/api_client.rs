// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El shell depende del
// trait `BackendApi`; `ApiClient` es la implementación gloo-net del navegador.
// ============================================================================

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{GalleryResponse, InitialData, LoginRequest, SignUpRequest};

/// Contrato con el backend (formas de request/response, no transporte)
#[async_trait(?Send)]
pub trait BackendApi {
    /// Galería pública, sin autenticación
    async fn get_public_gallery(&self) -> Result<GalleryResponse, ApiError>;

    /// Usuario actual y paquetes. Falla con `Unauthorized` si el token no vale.
    async fn get_initial_data(&self, token: &str) -> Result<InitialData, ApiError>;

    /// Devuelve un token nuevo
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    /// Devuelve un token nuevo
    async fn sign_up(&self, request: &SignUpRequest) -> Result<String, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::ApiClient;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::future::Future;

    use async_trait::async_trait;
    use futures::future::{select, Either};
    use gloo_net::http::{Request, Response};
    use gloo_timers::future::TimeoutFuture;
    use serde::de::DeserializeOwned;

    use super::BackendApi;
    use crate::config::AppConfig;
    use crate::errors::ApiError;
    use crate::models::{AuthResponse, GalleryResponse, InitialData, LoginRequest, SignUpRequest};

    #[derive(Clone)]
    pub struct ApiClient {
        base_url: String,
        timeout_ms: u32,
    }

    impl ApiClient {
        pub fn new(config: &AppConfig) -> Self {
            Self {
                base_url: config.backend_url().trim_end_matches('/').to_string(),
                timeout_ms: config.request_timeout_ms,
            }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        /// Corta la petición si supera el timeout configurado
        async fn with_timeout<T>(
            &self,
            request: impl Future<Output = Result<T, ApiError>>,
        ) -> Result<T, ApiError> {
            let request = Box::pin(request);
            let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));
            match select(request, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    log::warn!("⏱️ [API] Timeout tras {} ms", self.timeout_ms);
                    Err(ApiError::Timeout(self.timeout_ms))
                }
            }
        }

        async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
            if !response.ok() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| response.status_text());
                return Err(ApiError::from_status(status, error_text));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        }
    }

    #[async_trait(?Send)]
    impl BackendApi for ApiClient {
        async fn get_public_gallery(&self) -> Result<GalleryResponse, ApiError> {
            let url = self.url("/api/gallery");
            self.with_timeout(async move {
                let response = Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                Self::parse::<GalleryResponse>(response).await
            })
            .await
        }

        async fn get_initial_data(&self, token: &str) -> Result<InitialData, ApiError> {
            let url = self.url("/api/initial-data");
            let authorization = format!("Bearer {}", token);
            self.with_timeout(async move {
                let response = Request::get(&url)
                    .header("Authorization", &authorization)
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                Self::parse::<InitialData>(response).await
            })
            .await
        }

        async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
            let url = self.url("/api/auth/login");
            log::info!("🔐 [API] Login para: {}", request.email);
            self.with_timeout(async move {
                let response = Request::post(&url)
                    .json(request)
                    .map_err(|e| ApiError::Request(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                Self::parse::<AuthResponse>(response).await.map(|r| r.token)
            })
            .await
        }

        async fn sign_up(&self, request: &SignUpRequest) -> Result<String, ApiError> {
            let url = self.url("/api/auth/signup");
            log::info!("📝 [API] Registro para: {}", request.email);
            self.with_timeout(async move {
                let response = Request::post(&url)
                    .json(request)
                    .map_err(|e| ApiError::Request(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                Self::parse::<AuthResponse>(response).await.map(|r| r.token)
            })
            .await
        }
    }
}
