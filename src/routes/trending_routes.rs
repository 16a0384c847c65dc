use axum::{Router, routing::get};
use crate::{AppState, controllers::trending_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/trending", get(trending_controller::get_trending_page))
        .route("/trending/list", get(trending_controller::get_trending_list))
}
