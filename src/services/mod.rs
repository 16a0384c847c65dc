pub mod analytics_api;
pub mod api_resolver;

pub mod dashboard_service;
pub mod products_service;
pub mod detail_service;
pub mod stats_service;
pub mod alerts_service;
pub mod health_service;
