pub mod num;
pub mod product;
pub mod analytics;
pub mod alert;

pub use product::{PricePoint, Product, TrendingProduct};
pub use analytics::{
    BackendHealth, CatalogStats, CategoryCount, DashboardSummary, MarketSaturation,
    ProfitOpportunity, SourceCount, TrendMetrics, TrendingEntry,
};
pub use alert::Alert;
