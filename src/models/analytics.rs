use serde::{Deserialize, Serialize};

use super::num;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendMetrics {
    #[serde(rename = "score_tendance", default, deserialize_with = "num::opt_f64")]
    pub trend_score: Option<f64>,

    #[serde(rename = "volume_ventes_estime", default, deserialize_with = "num::opt_i64")]
    pub estimated_sales: Option<i64>,

    // 0-100
    #[serde(rename = "saturation_marche", default, deserialize_with = "num::opt_f64")]
    pub market_saturation: Option<f64>,

    #[serde(rename = "marge_beneficiaire", default, deserialize_with = "num::opt_f64")]
    pub profit_margin: Option<f64>,

    #[serde(rename = "date_calcul", default)]
    pub computed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub id: i64,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub score: Option<f64>,
}

/// Cross-marketplace comparison: buy on the source marketplace, sell on the target one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitOpportunity {
    pub product_id: i64,

    #[serde(default)]
    pub product_name: String,

    #[serde(rename = "aliexpress_price", default, deserialize_with = "num::opt_f64")]
    pub source_price: Option<f64>,

    #[serde(rename = "amazon_price", default, deserialize_with = "num::opt_f64")]
    pub target_price: Option<f64>,

    #[serde(rename = "marge_brute", default, deserialize_with = "num::opt_f64")]
    pub gross_margin: Option<f64>,

    #[serde(rename = "marge_nette", default, deserialize_with = "num::opt_f64")]
    pub net_margin: Option<f64>,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub roi_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSaturation {
    pub product_id: i64,

    #[serde(default)]
    pub product_name: String,

    #[serde(default, deserialize_with = "num::opt_i64")]
    pub competitors_count: Option<i64>,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub saturation_score: Option<f64>,

    // "high" | "medium" | "low"
    #[serde(default)]
    pub market_opportunity: Option<String>,
}

/// Aggregate served by `/api/analytics/dashboard/summary`, built fresh per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "num::opt_i64")]
    pub total_products: Option<i64>,

    #[serde(default)]
    pub top_trending: Vec<TrendingEntry>,

    #[serde(default)]
    pub top_profit_opportunities: Vec<ProfitOpportunity>,

    #[serde(default)]
    pub low_saturation_markets: Vec<MarketSaturation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "categorie", default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "num::opt_i64")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCount {
    #[serde(rename = "source", default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "num::opt_i64")]
    pub count: Option<i64>,
}

/// Catalog-wide aggregates served by `/api/analytics/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    #[serde(default, deserialize_with = "num::opt_i64")]
    pub total_products: Option<i64>,

    #[serde(default, deserialize_with = "num::opt_f64")]
    pub avg_price: Option<f64>,

    #[serde(default, deserialize_with = "num::opt_i64")]
    pub total_reviews: Option<i64>,

    #[serde(default)]
    pub categories: Vec<CategoryCount>,

    #[serde(default)]
    pub sources: Vec<SourceCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendHealth {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}
