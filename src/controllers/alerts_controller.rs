use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde::Deserialize;
use serde_json::json;

use crate::{render, services::alerts_service, views::scope::ViewScope, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct AlertsQuery {
    pub include_inactive: Option<String>,
}

impl AlertsQuery {
    // checkbox values arrive as "on"; links use "true"/"1"
    fn include_inactive(&self) -> bool {
        matches!(
            self.include_inactive.as_deref().map(str::trim),
            Some("on" | "true" | "1")
        )
    }
}

// ---------------- Pages ----------------

// GET /alerts
pub async fn get_alerts_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(q): Query<AlertsQuery>,
) -> Response {
    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Alerts",
        "/alerts",
        "pages/alerts",
        json!({ "include_inactive": q.include_inactive() }),
    )
}

// ---------------- Partials ----------------

// GET /alerts/list
pub async fn get_alerts_list(
    State(state): State<AppState>,
    Query(q): Query<AlertsQuery>,
) -> Response {
    let scope = ViewScope::new();
    let _guard = scope.guard();

    let view = alerts_service::load_alerts(&state, &scope, q.include_inactive()).await;
    render::partial(&state, "partials/alerts_list", &alerts_service::alerts_ctx(&view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(v: Option<&str>) -> AlertsQuery {
        AlertsQuery {
            include_inactive: v.map(str::to_string),
        }
    }

    #[test]
    fn include_inactive_accepts_checkbox_and_flags() {
        assert!(q(Some("on")).include_inactive());
        assert!(q(Some("true")).include_inactive());
        assert!(q(Some("1")).include_inactive());
        assert!(!q(Some("false")).include_inactive());
        assert!(!q(Some("")).include_inactive());
        assert!(!q(None).include_inactive());
    }
}
