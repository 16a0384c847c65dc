//! Product detail view: three independent backend calls whose results land in
//! their own section as soon as each one resolves.

use futures_util::{
    future::BoxFuture,
    stream::{self, FuturesUnordered},
    FutureExt, Stream, StreamExt,
};
use handlebars::Handlebars;
use serde_json::json;

use crate::{
    models::{PricePoint, Product, TrendMetrics},
    services::analytics_api::AnalyticsClient,
    views::{badges, format, scope::ViewScope, state::{merge, ViewState}},
};

pub const MAX_HISTORY_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSection {
    Product,
    History,
    Trend,
}

impl DetailSection {
    pub const ALL: [DetailSection; 3] =
        [DetailSection::Product, DetailSection::History, DetailSection::Trend];

    /// SSE event name; the page swaps the section listening on it.
    pub fn event_name(self) -> &'static str {
        match self {
            DetailSection::Product => "product",
            DetailSection::History => "history",
            DetailSection::Trend => "trend",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            DetailSection::Product => "partials/detail_product",
            DetailSection::History => "partials/detail_history",
            DetailSection::Trend => "partials/detail_trend",
        }
    }
}

#[derive(Debug)]
pub enum DetailUpdate {
    Product(ViewState<Product>),
    History(ViewState<Vec<PricePoint>>),
    Trend(ViewState<TrendMetrics>),
}

impl DetailUpdate {
    pub fn section(&self) -> DetailSection {
        match self {
            DetailUpdate::Product(_) => DetailSection::Product,
            DetailUpdate::History(_) => DetailSection::History,
            DetailUpdate::Trend(_) => DetailSection::Trend,
        }
    }
}

/// Page-local state of one detail view. Each section only ever changes through
/// its own update.
#[derive(Debug)]
pub struct DetailView {
    pub product_id: i64,
    pub product: ViewState<Product>,
    pub history: ViewState<Vec<PricePoint>>,
    pub trend: ViewState<TrendMetrics>,
}

impl DetailView {
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            product: ViewState::Loading,
            history: ViewState::Loading,
            trend: ViewState::Loading,
        }
    }

    pub fn apply(&mut self, update: DetailUpdate) -> DetailSection {
        let section = update.section();
        match update {
            DetailUpdate::Product(s) => self.product = s,
            DetailUpdate::History(s) => self.history = s,
            DetailUpdate::Trend(s) => self.trend = s,
        }
        section
    }

    pub fn is_settled(&self) -> bool {
        self.product.is_settled() && self.history.is_settled() && self.trend.is_settled()
    }

    pub fn section_ctx(&self, section: DetailSection) -> serde_json::Value {
        let mut ctx = match section {
            DetailSection::Product => self.product.to_ctx(product_data),
            DetailSection::History => self.history.to_ctx(|points| history_data(points)),
            DetailSection::Trend => self.trend.to_ctx(trend_data),
        };
        merge(&mut ctx, json!({ "product_id": self.product_id }));
        ctx
    }

    pub fn render_section(&self, hbs: &Handlebars<'_>, section: DetailSection) -> String {
        hbs.render(section.template(), &self.section_ctx(section))
            .unwrap_or_else(|e| format!("template error: {e}"))
    }
}

fn product_data(p: &Product) -> serde_json::Value {
    let stock = p.stock_status.as_deref();
    json!({
        "name": p.name,
        "category": p.category,
        "source": p.source,
        "price": format::money_plain(p.price),
        "rating": format::plain(p.rating),
        "reviews": format::count(p.reviews_count),
        "stock_status": stock,
        "stock_class": badges::stock_tone(stock).pill_class(),
        "description": p.description,
        "asin": p.asin.as_deref().unwrap_or("-"),
        "url": p.url,
        "image_url": p.image_url,
    })
}

fn history_data(points: &[PricePoint]) -> serde_json::Value {
    let rows: Vec<_> = points
        .iter()
        .take(MAX_HISTORY_ROWS)
        .map(|pt| {
            json!({
                "date": format::short_date(pt.date.as_deref()),
                "price": format::money_plain(pt.price),
            })
        })
        .collect();

    json!({ "count": points.len(), "points": rows })
}

fn trend_data(t: &TrendMetrics) -> serde_json::Value {
    json!({
        "trend_score": format::plain(t.trend_score),
        "estimated_sales": format::count(t.estimated_sales),
        "saturation": format::plain(t.market_saturation),
        "profit_margin": format::money_plain(t.profit_margin),
    })
}

/// Issue the three detail fetches at once and yield each settled section in
/// completion order. The stream ends early, dropping late results, when
/// `scope` is cancelled.
///
/// Only the product treats a 404 as "not found"; for history and trend it
/// means nothing has been recorded yet.
pub fn detail_updates(
    api: AnalyticsClient,
    product_id: i64,
    scope: ViewScope,
) -> impl Stream<Item = DetailUpdate> + Send + 'static {
    let pending: FuturesUnordered<BoxFuture<'static, DetailUpdate>> = FuturesUnordered::new();

    let a = api.clone();
    pending.push(
        async move {
            DetailUpdate::Product(ViewState::settle_logged("detail.product", a.product(product_id).await))
        }
        .boxed(),
    );

    let a = api.clone();
    pending.push(
        async move {
            DetailUpdate::History(ViewState::settle_missing_as_empty(
                "detail.history",
                a.price_history(product_id).await,
            ))
        }
        .boxed(),
    );

    pending.push(
        async move {
            DetailUpdate::Trend(ViewState::settle_missing_as_empty(
                "detail.trend",
                api.product_trend(product_id).await,
            ))
        }
        .boxed(),
    );

    stream::unfold((pending, scope), |(mut pending, scope)| async move {
        let update = scope.run(pending.next()).await.flatten()?;
        Some((update, (pending, scope)))
    })
}
