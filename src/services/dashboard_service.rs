use serde_json::json;

use crate::{
    models::DashboardSummary,
    views::{badges, format, scope::ViewScope, state::ViewState},
    AppState,
};

pub const MAX_PROFIT_CARDS: usize = 6;
pub const MAX_MARKET_CARDS: usize = 8;

pub async fn load_summary(state: &AppState, scope: &ViewScope) -> ViewState<DashboardSummary> {
    ViewState::load("dashboard", scope, state.api.dashboard_summary()).await
}

/// Build the context used by the `partials/dashboard_summary` template.
///
/// An empty summary still renders the stat cards, all at zero.
pub fn summary_ctx(view: &ViewState<DashboardSummary>) -> serde_json::Value {
    let mut ctx = view.to_ctx(summary_data);
    if matches!(view, ViewState::Empty) {
        crate::views::state::merge(&mut ctx, summary_data(&DashboardSummary::default()));
    }
    ctx
}

fn summary_data(s: &DashboardSummary) -> serde_json::Value {
    let trending: Vec<_> = s
        .top_trending
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "name": t.name,
                "score": format::fixed1(t.score),
            })
        })
        .collect();

    let profits: Vec<_> = s
        .top_profit_opportunities
        .iter()
        .take(MAX_PROFIT_CARDS)
        .map(|p| {
            json!({
                "product_id": p.product_id,
                "name": p.product_name,
                "source_price": format::money_plain(p.source_price),
                "target_price": format::money_plain(p.target_price),
                "net_margin": format::money_fixed(p.net_margin),
                "roi": format::fixed1(p.roi_percentage),
            })
        })
        .collect();

    let markets: Vec<_> = s
        .low_saturation_markets
        .iter()
        .take(MAX_MARKET_CARDS)
        .map(|m| {
            let opportunity = m.market_opportunity.as_deref();
            json!({
                "product_id": m.product_id,
                "name": m.product_name,
                "competitors": format::count(m.competitors_count),
                "saturation": format::plain(m.saturation_score),
                "opportunity": opportunity.unwrap_or("unknown"),
                "badge_class": badges::opportunity_tone(opportunity).badge_class(),
            })
        })
        .collect();

    json!({
        "total_products": format::count(s.total_products),
        "trending_count": s.top_trending.len(),
        "profit_count": s.top_profit_opportunities.len(),
        "market_count": s.low_saturation_markets.len(),
        "trending": trending,
        "profits": profits,
        "markets": markets,
    })
}
