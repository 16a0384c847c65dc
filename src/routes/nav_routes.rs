use axum::{Router, routing::get};
use crate::{AppState, controllers::nav_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/nav", get(nav_controller::get_nav))
}
