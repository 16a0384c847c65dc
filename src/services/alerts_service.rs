use serde_json::json;

use crate::{
    models::Alert,
    views::{badges, format, scope::ViewScope, state::ViewState},
    AppState,
};

pub async fn load_alerts(
    state: &AppState,
    scope: &ViewScope,
    include_inactive: bool,
) -> ViewState<Vec<Alert>> {
    ViewState::load("alerts", scope, state.api.alerts(include_inactive)).await
}

fn kind_label(kind: &str) -> String {
    match kind {
        "price_drop" => "Price drop".to_string(),
        "new_viral" => "New viral product".to_string(),
        "low_saturation" => "Low saturation".to_string(),
        "" => "Alert".to_string(),
        other => other.replace('_', " "),
    }
}

/// Build the context used by the `partials/alerts_list` template.
pub fn alerts_ctx(view: &ViewState<Vec<Alert>>) -> serde_json::Value {
    view.to_ctx(|alerts| {
        let items: Vec<_> = alerts
            .iter()
            .map(|a| {
                json!({
                    "id": a.id,
                    "product_id": a.product_id,
                    "product_name": a.product_name,
                    "kind": kind_label(&a.kind),
                    "threshold": format::money_plain(a.threshold),
                    "created": format::short_date(a.created_at.as_deref()),
                    "active": a.active,
                    "status_label": if a.active { "Active" } else { "Inactive" },
                    "badge_class": badges::active_tone(a.active).badge_class(),
                })
            })
            .collect();

        json!({ "count": alerts.len(), "alerts": items })
    })
}
