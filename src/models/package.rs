use serde::{Deserialize, Serialize};

/// Paquete de suscripción (solo lectura para el shell)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub image_count: u32,
    pub price: f64,
    pub visible: bool,
}
