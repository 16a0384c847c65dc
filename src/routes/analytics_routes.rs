use axum::{Router, routing::get};
use crate::{AppState, controllers::analytics_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/analytics", get(analytics_controller::get_analytics_page))
        .route("/analytics/stats", get(analytics_controller::get_analytics_stats))
}
