use axum::{Router, routing::get};
use crate::{AppState, controllers::products_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/products", get(products_controller::get_products_page))
        .route("/products/list", get(products_controller::get_products_list))
        .route("/products/:id", get(products_controller::get_product_page))
        .route("/products/:id/stream", get(products_controller::get_product_stream))
}
