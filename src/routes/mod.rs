use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod products_routes;
pub mod trending_routes;
pub mod analytics_routes;
pub mod alerts_routes;
pub mod nav_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = products_routes::add_routes(router);
    let router = trending_routes::add_routes(router);
    let router = analytics_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = nav_routes::add_routes(router);

    router
        .fallback(home_controller::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
