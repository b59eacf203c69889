use serde::{Deserialize, Serialize};

/// Par antes/después de la galería pública
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: u64,
    pub before_src: String,
    pub after_src: String,
}
