use axum::{Router, routing::get};
use crate::{AppState, controllers::home_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home_controller::home))
        .route("/dashboard/summary", get(home_controller::get_summary))
        .route("/health", get(home_controller::health))
        .route("/health/api", get(home_controller::health_api))
        .route("/static/app.css", get(home_controller::stylesheet))
}
