use serde::{Deserialize, Serialize};

use super::num;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,

    pub product_id: i64,

    #[serde(default)]
    pub product_name: Option<String>,

    // "price_drop" | "new_viral" | "low_saturation"
    #[serde(rename = "type_alerte", default)]
    pub kind: String,

    #[serde(rename = "seuil", default, deserialize_with = "num::opt_f64")]
    pub threshold: Option<f64>,

    #[serde(rename = "actif", default)]
    pub active: bool,

    #[serde(default)]
    pub created_at: Option<String>,
}
