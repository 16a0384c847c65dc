use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{
    render,
    services::{dashboard_service, health_service},
    templates,
    views::scope::ViewScope,
    AppState,
};

// GET /
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Dashboard",
        "/",
        "pages/dashboard",
        json!({}),
    )
}

// GET /dashboard/summary (HTMX partial)
pub async fn get_summary(State(state): State<AppState>) -> Response {
    let scope = ViewScope::new();
    let _guard = scope.guard();

    let view = dashboard_service::load_summary(&state, &scope).await;
    render::partial(&state, "partials/dashboard_summary", &dashboard_service::summary_ctx(&view))
}

pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render::page(
        &state,
        &headers,
        StatusCode::NOT_FOUND,
        "404",
        "/404",
        "pages/not_found",
        json!({}),
    )
}

// GET /static/app.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        templates::APP_CSS,
    )
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Html("ok".to_string()))
}

// GET /health/api
pub async fn health_api(State(state): State<AppState>) -> Response {
    let result = health_service::check_backend(&state).await;
    let status = if health_service::is_healthy(&result) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let ctx = health_service::health_ctx(state.api.base_url(), &result);
    match state.hbs.render("partials/api_health", &ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("template error: {e}")),
        )
            .into_response(),
    }
}
