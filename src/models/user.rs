use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Chargeback,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_email: String,
    pub package_name: String,
    pub package_id: u64,
    pub amount: f64,
    pub date: String, // ISO 8601
    pub status: TransactionStatus,
}

/// Usuario actual resuelto por el backend.
///
/// Cualquier campo `password` que venga en la respuesta se descarta al
/// deserializar: la identidad expuesta al render nunca lleva credenciales.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub country: String,
    pub is_admin: bool,
    pub registration_date: String,
    #[serde(default)]
    pub subscription_package_id: Option<u64>,
    #[serde(default)]
    pub image_credits: Option<u32>,
    #[serde(default)]
    pub purchase_history: Option<Vec<Transaction>>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl User {
    /// Fecha de registro parseada (RFC 3339 o fecha simple `YYYY-MM-DD`)
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.registration_date) {
            return Some(date.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.registration_date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    /// Inicial para el avatar cuando no hay foto de perfil
    pub fn avatar_initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn has_image_credits(&self) -> bool {
        self.image_credits.map_or(false, |c| c > 0)
    }

    /// Copia con un crédito de imagen menos (sin bajar de cero)
    pub fn with_credit_consumed(&self) -> Self {
        let mut updated = self.clone();
        updated.image_credits = self.image_credits.map(|c| c.saturating_sub(1));
        updated
    }
}
