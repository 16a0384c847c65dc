use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::json;

use crate::{render, services::stats_service, views::scope::ViewScope, AppState};

// GET /analytics
pub async fn get_analytics_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Analytics",
        "/analytics",
        "pages/analytics",
        json!({}),
    )
}

// GET /analytics/stats (HTMX partial)
pub async fn get_analytics_stats(State(state): State<AppState>) -> Response {
    let scope = ViewScope::new();
    let _guard = scope.guard();

    let view = stats_service::load_stats(&state, &scope).await;
    render::partial(&state, "partials/analytics_stats", &stats_service::stats_ctx(&view))
}
