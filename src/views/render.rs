use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{views::nav::NavShell, AppState};

pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn render_full(
    state: &AppState,
    title: &str,
    path: &str,
    body_html: String,
) -> Result<String, String> {
    let nav = NavShell::new(path);

    let ctx = json!({
        "title": title,
        "body": body_html,
        "nav": nav.to_ctx(),
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}

/// Render a page body and wrap it in the layout unless HTMX asked for the body only.
pub fn page(
    state: &AppState,
    headers: &HeaderMap,
    status: StatusCode,
    title: &str,
    path: &str,
    tpl: &str,
    ctx: serde_json::Value,
) -> Response {
    let body = match state.hbs.render(tpl, &ctx) {
        Ok(s) => s,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("template error: {e}")),
            )
                .into_response()
        }
    };

    if is_htmx(headers) {
        return (status, Html(body)).into_response();
    }

    match render_full(state, title, path, body) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

/// Render an HTMX partial; template failures surface as a 500.
pub fn partial(state: &AppState, tpl: &str, ctx: &serde_json::Value) -> Response {
    match state.hbs.render(tpl, ctx) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("template error: {e}")),
        )
            .into_response(),
    }
}
