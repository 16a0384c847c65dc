use std::future::Future;

use serde_json::{json, Value};

use crate::{
    errors::ApiError,
    models::{CatalogStats, DashboardSummary, Product, TrendMetrics},
    views::scope::ViewScope,
};

/// Lifecycle of one view: `Loading` until its fetch settles, then exactly one
/// of the terminal states.
#[derive(Debug, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(T),
    Empty,
    Failed(ApiError),
}

/// Whether a payload has nothing worth rendering.
pub trait Payload {
    fn is_empty(&self) -> bool;
}

impl<T> Payload for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl Payload for Product {
    fn is_empty(&self) -> bool {
        false
    }
}

impl Payload for TrendMetrics {
    fn is_empty(&self) -> bool {
        false
    }
}

impl Payload for DashboardSummary {
    fn is_empty(&self) -> bool {
        self.total_products.unwrap_or(0) == 0
            && self.top_trending.is_empty()
            && self.top_profit_opportunities.is_empty()
            && self.low_saturation_markets.is_empty()
    }
}

impl Payload for CatalogStats {
    fn is_empty(&self) -> bool {
        self.total_products.unwrap_or(0) == 0 && self.categories.is_empty() && self.sources.is_empty()
    }
}

impl<T: Payload> ViewState<T> {
    pub fn settle(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(v) if v.is_empty() => ViewState::Empty,
            Ok(v) => ViewState::Ready(v),
            Err(e) => ViewState::Failed(e),
        }
    }
}

impl<T: Payload> ViewState<T> {
    /// Run one fetch inside `scope` and settle it. A fetch whose scope was
    /// torn down first never settles and the view stays `Loading`.
    pub async fn load<F>(view: &'static str, scope: &ViewScope, fetch: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        match scope.run(fetch).await {
            Some(result) => Self::settle_logged(view, result),
            None => {
                tracing::debug!(view, "view torn down before fetch settled");
                ViewState::Loading
            }
        }
    }
}

impl<T> ViewState<T> {
    /// Same as [`ViewState::settle`], logging failures at the view boundary.
    pub fn settle_logged(view: &'static str, result: Result<T, ApiError>) -> Self
    where
        T: Payload,
    {
        if let Err(e) = &result {
            tracing::warn!(view, error = %e, "analytics fetch failed");
        }
        Self::settle(result)
    }

    /// Like [`ViewState::settle_logged`], but a 404 means the backend has not
    /// computed anything for this section yet and settles as `Empty`.
    pub fn settle_missing_as_empty(view: &'static str, result: Result<T, ApiError>) -> Self
    where
        T: Payload,
    {
        match result {
            Err(e) if e.is_not_found() => {
                tracing::debug!(view, error = %e, "no data yet");
                ViewState::Empty
            }
            other => Self::settle_logged(view, other),
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::Empty => "empty",
            ViewState::Failed(_) => "error",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Template context: phase flags plus whatever `data` produces for a ready payload.
    pub fn to_ctx(&self, data: impl FnOnce(&T) -> Value) -> Value {
        let mut ctx = json!({
            "phase": self.phase(),
            "loading": matches!(self, ViewState::Loading),
            "ready": matches!(self, ViewState::Ready(_)),
            "empty": matches!(self, ViewState::Empty),
            "error": Value::Null,
        });

        match self {
            ViewState::Ready(v) => merge(&mut ctx, data(v)),
            ViewState::Failed(e) => {
                ctx["error"] = json!({
                    "reason": e.reason(),
                    "not_found": e.is_not_found(),
                });
            }
            ViewState::Loading | ViewState::Empty => {}
        }
        ctx
    }
}

pub fn merge(into: &mut Value, extra: Value) {
    if let (Value::Object(dst), Value::Object(src)) = (into, extra) {
        dst.extend(src);
    }
}
