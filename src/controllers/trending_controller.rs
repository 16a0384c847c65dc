use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::json;

use crate::{render, services::products_service, views::scope::ViewScope, AppState};

// GET /trending
pub async fn get_trending_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Trending",
        "/trending",
        "pages/trending",
        json!({}),
    )
}

// GET /trending/list (HTMX partial)
pub async fn get_trending_list(State(state): State<AppState>) -> Response {
    let scope = ViewScope::new();
    let _guard = scope.guard();

    let view = products_service::load_trending(&state, &scope).await;
    render::partial(&state, "partials/trending_list", &products_service::trending_ctx(&view))
}
