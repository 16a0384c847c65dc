use serde_json::json;

use crate::{
    models::CatalogStats,
    views::{format, scope::ViewScope, state::{merge, ViewState}},
    AppState,
};

pub async fn load_stats(state: &AppState, scope: &ViewScope) -> ViewState<CatalogStats> {
    ViewState::load("analytics", scope, state.api.stats()).await
}

/// Build the context used by the `partials/analytics_stats` template.
pub fn stats_ctx(view: &ViewState<CatalogStats>) -> serde_json::Value {
    let mut ctx = view.to_ctx(stats_data);
    if matches!(view, ViewState::Empty) {
        merge(&mut ctx, stats_data(&CatalogStats::default()));
    }
    ctx
}

fn stats_data(s: &CatalogStats) -> serde_json::Value {
    let categories: Vec<_> = s
        .categories
        .iter()
        .map(|c| {
            json!({
                "name": c.name.as_deref().unwrap_or("Uncategorized"),
                "count": format::count(c.count),
            })
        })
        .collect();

    let sources: Vec<_> = s
        .sources
        .iter()
        .map(|c| {
            json!({
                "name": c.name.as_deref().unwrap_or("Unknown"),
                "count": format::count(c.count),
            })
        })
        .collect();

    json!({
        "total_products": format::count(s.total_products),
        "avg_price": format::money_fixed(s.avg_price),
        "total_reviews": format::count(s.total_reviews),
        "categories": categories,
        "sources": sources,
    })
}
