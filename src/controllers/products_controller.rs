use std::{convert::Infallible, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
};
use futures_util::{stream, StreamExt};
use reqwest::Url;
use serde_json::json;

use crate::{
    render,
    services::{
        analytics_api::{ProductFilter, SortOrder},
        detail_service::{self, DetailSection, DetailUpdate, DetailView},
        products_service,
    },
    templates::Hbs,
    views::scope::{ScopeGuard, ViewScope},
    AppState,
};

fn encode_query(pairs: &[(&'static str, String)]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return String::new();
    };
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    url.query().unwrap_or_default().to_string()
}

fn parse_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn product_not_found(state: &AppState, headers: &HeaderMap) -> Response {
    render::page(
        state,
        headers,
        StatusCode::NOT_FOUND,
        "404",
        "/products",
        "pages/not_found",
        json!({}),
    )
}

// ---------------- Pages ----------------

// GET /products
pub async fn get_products_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ProductFilter>,
) -> Response {
    let pairs = filter.to_pairs();
    let value = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    };

    let current = filter.sort_order().unwrap_or(SortOrder::Newest);
    let sort_options: Vec<_> = SortOrder::ALL
        .iter()
        .map(|s| {
            json!({
                "value": s.as_str(),
                "label": s.label(),
                "selected": *s == current,
            })
        })
        .collect();

    let ctx = json!({
        "query": encode_query(&pairs),
        "category": value("category"),
        "source": value("source"),
        "min_price": value("min_price"),
        "max_price": value("max_price"),
        "sort": current.as_str(),
        "sort_options": sort_options,
    });

    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Products",
        "/products",
        "pages/products",
        ctx,
    )
}

// GET /products/:id
pub async fn get_product_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_product_id(&raw_id) else {
        return product_not_found(&state, &headers);
    };

    // every section starts out as its loading placeholder
    let view = DetailView::new(id);
    let mut ctx = json!({ "product_id": id });
    for section in DetailSection::ALL {
        ctx[section.event_name()] = json!(view.render_section(&state.hbs, section));
    }

    render::page(
        &state,
        &headers,
        StatusCode::OK,
        "Product",
        &format!("/products/{id}"),
        "pages/product_detail",
        ctx,
    )
}

// ---------------- Partials ----------------

// GET /products/list
pub async fn get_products_list(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Response {
    let scope = ViewScope::new();
    let _guard = scope.guard();

    let view = products_service::load_products(&state, &scope, &filter).await;
    render::partial(&state, "partials/products_list", &products_service::products_ctx(&view))
}

// Owns the view for as long as the event stream lives; dropping it tears the view down.
struct DetailEvents {
    view: DetailView,
    hbs: Hbs,
    _guard: ScopeGuard,
}

impl DetailEvents {
    fn event(&mut self, update: DetailUpdate) -> Event {
        let section = self.view.apply(update);
        // SSE data may not carry carriage returns
        let html = self.view.render_section(&self.hbs, section).replace('\r', "");
        Event::default().event(section.event_name()).data(html)
    }
}

// GET /products/:id/stream (SSE)
pub async fn get_product_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_product_id(&raw_id) else {
        return product_not_found(&state, &headers);
    };

    let scope = ViewScope::new();
    let mut events = DetailEvents {
        view: DetailView::new(id),
        hbs: state.hbs.clone(),
        _guard: scope.guard(),
    };

    let stream = detail_service::detail_updates(state.api.clone(), id, scope)
        .map(move |update| events.event(update))
        .chain(stream::once(async { Event::default().event("done").data("") }))
        .map(Ok::<_, Infallible>);

    Sse::new(stream)
        .keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(20))
                .text("keep-alive"),
        )
        .into_response()
}
