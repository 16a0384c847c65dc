use serde_json::json;

use crate::{
    models::{Product, TrendingProduct},
    services::analytics_api::ProductFilter,
    views::{badges, format, scope::ViewScope, state::ViewState},
    AppState,
};

pub async fn load_products(
    state: &AppState,
    scope: &ViewScope,
    filter: &ProductFilter,
) -> ViewState<Vec<Product>> {
    ViewState::load("products", scope, state.api.products(filter)).await
}

pub async fn load_trending(state: &AppState, scope: &ViewScope) -> ViewState<Vec<TrendingProduct>> {
    ViewState::load("trending", scope, state.api.trending()).await
}

/// Card fields shared by the product and trending lists.
pub fn product_card(p: &Product) -> serde_json::Value {
    let stock = p.stock_status.as_deref();
    json!({
        "id": p.id,
        "name": p.name,
        "category": p.category,
        "source": p.source,
        "price": format::money_plain(p.price),
        "rating": format::plain(p.rating),
        "reviews": format::count(p.reviews_count),
        "image_url": p.image_url,
        "stock_status": stock,
        "stock_class": badges::stock_tone(stock).pill_class(),
    })
}

/// Build the context used by the `partials/products_list` template.
pub fn products_ctx(view: &ViewState<Vec<Product>>) -> serde_json::Value {
    view.to_ctx(|products| {
        json!({
            "count": products.len(),
            "products": products.iter().map(product_card).collect::<Vec<_>>(),
        })
    })
}

/// Build the context used by the `partials/trending_list` template.
pub fn trending_ctx(view: &ViewState<Vec<TrendingProduct>>) -> serde_json::Value {
    view.to_ctx(|items| {
        let products: Vec<_> = items
            .iter()
            .map(|t| {
                let mut card = product_card(&t.product);
                card["score"] = json!(format::plain(t.score));
                card
            })
            .collect();

        json!({ "count": items.len(), "products": products })
    })
}
