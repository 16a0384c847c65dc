use serde::{Deserialize, Serialize};

use super::num;

/// A marketplace listing as served by `/api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(rename = "categorie", default)]
    pub category: Option<String>,

    #[serde(rename = "prix", default, deserialize_with = "num::opt_f64")]
    pub price: Option<f64>,

    // marketplace identifier: amazon, aliexpress, ebay, shopify...
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "num::opt_i64")]
    pub reviews_count: Option<i64>,

    // "In Stock" | anything else
    #[serde(default)]
    pub stock_status: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub asin: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub date_scrape: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "prix", default, deserialize_with = "num::opt_f64")]
    pub price: Option<f64>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

/// Entry of `/api/analytics/trending`: a product with its trend score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingProduct {
    #[serde(flatten)]
    pub product: Product,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub score: Option<f64>,
}
