use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    errors::ApiError,
    models::{
        Alert, BackendHealth, CatalogStats, DashboardSummary, PricePoint, Product,
        TrendMetrics, TrendingProduct,
    },
};

/// Read-only client for the analytics backend.
///
/// Cheap to clone; every view gets the same resolved base URL.
#[derive(Clone)]
pub struct AnalyticsClient {
    http: Client,
    base: String,
}

impl AnalyticsClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET analytics");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { url });
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }

        let text = res
            .text()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        serde_json::from_str::<T>(&text).map_err(|source| ApiError::Decode { url, source })
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/api/analytics/dashboard/summary", &[]).await
    }

    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products/", &filter.to_backend_query()).await
    }

    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("/api/products/{id}"), &[]).await
    }

    pub async fn price_history(&self, id: i64) -> Result<Vec<PricePoint>, ApiError> {
        self.get_json(&format!("/api/products/{id}/price-history"), &[]).await
    }

    pub async fn product_trend(&self, id: i64) -> Result<TrendMetrics, ApiError> {
        self.get_json(&format!("/api/analytics/product/{id}/trend"), &[]).await
    }

    pub async fn trending(&self) -> Result<Vec<TrendingProduct>, ApiError> {
        self.get_json("/api/analytics/trending", &[]).await
    }

    pub async fn stats(&self) -> Result<CatalogStats, ApiError> {
        self.get_json("/api/analytics/stats", &[]).await
    }

    pub async fn alerts(&self, include_inactive: bool) -> Result<Vec<Alert>, ApiError> {
        let query = if include_inactive {
            vec![("actif_only", "false".to_string())]
        } else {
            Vec::new()
        };
        self.get_json("/api/alerts/", &query).await
    }

    pub async fn health(&self) -> Result<BackendHealth, ApiError> {
        self.get_json("/health", &[]).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
            SortOrder::Rating => "Best rated",
        }
    }

    fn backend_value(self) -> &'static str {
        match self {
            SortOrder::Newest => "date_scrape",
            SortOrder::PriceAsc => "prix_asc",
            SortOrder::PriceDesc => "prix_desc",
            SortOrder::Rating => "rating",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
            SortOrder::Rating => "rating",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "newest" => Some(SortOrder::Newest),
            "price_asc" => Some(SortOrder::PriceAsc),
            "price_desc" => Some(SortOrder::PriceDesc),
            "rating" => Some(SortOrder::Rating),
            _ => None,
        }
    }
}

/// Product list filters as submitted by the filter form.
///
/// Everything arrives as text (empty inputs are submitted as `""`); invalid
/// values are dropped instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub source: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

fn text(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn price(v: &Option<String>) -> Option<f64> {
    text(v)?.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

fn count(v: &Option<String>) -> Option<u32> {
    text(v)?.parse::<u32>().ok()
}

impl ProductFilter {
    pub fn sort_order(&self) -> Option<SortOrder> {
        text(&self.sort).and_then(|s| SortOrder::parse(&s))
    }

    /// Normalized `(name, value)` pairs using the dashboard's own parameter names.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(c) = text(&self.category) {
            out.push(("category", c));
        }
        if let Some(s) = text(&self.source) {
            out.push(("source", s));
        }
        if let Some(p) = price(&self.min_price) {
            out.push(("min_price", p.to_string()));
        }
        if let Some(p) = price(&self.max_price) {
            out.push(("max_price", p.to_string()));
        }
        if let Some(s) = self.sort_order() {
            out.push(("sort", s.as_str().to_string()));
        }
        if let Some(n) = count(&self.skip) {
            out.push(("skip", n.to_string()));
        }
        if let Some(n) = count(&self.limit) {
            out.push(("limit", n.to_string()));
        }
        out
    }

    pub fn to_backend_query(&self) -> Vec<(&'static str, String)> {
        self.to_pairs()
            .into_iter()
            .map(|(k, v)| match k {
                "category" => ("categorie", v),
                "min_price" => ("prix_min", v),
                "max_price" => ("prix_max", v),
                "sort" => (
                    "sort_by",
                    SortOrder::parse(&v)
                        .map(|s| s.backend_value().to_string())
                        .unwrap_or(v),
                ),
                _ => (k, v),
            })
            .collect()
    }
}
