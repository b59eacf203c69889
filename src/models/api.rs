// ============================================================================
// API MODELS - Formas de request/response del backend
// ============================================================================

use serde::{Deserialize, Serialize};
use super::{GalleryImage, Package, User};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct InitialData {
    pub user: User,
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub country: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
}
