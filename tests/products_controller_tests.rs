mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use trendboard::routes;

use common::{response_body_string, spawn_backend, test_state, Canned};

const PRODUCTS: &str = "/api/products/";

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn products_fixture() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "nom": "Desk Lamp",
            "categorie": "Home",
            "prix": "19.99",
            "source": "amazon",
            "rating": 4.5,
            "reviews_count": 1200,
            "stock_status": "In Stock",
        },
        {
            "id": 2,
            "nom": "Phone Stand",
            "categorie": "Electronics",
            "prix": 20,
            "source": "aliexpress",
            "stock_status": "Only 2 left",
        }
    ])
}

#[tokio::test]
async fn products_page_keeps_filters_in_shell() {
    let backend = spawn_backend(vec![(PRODUCTS, Canned::json(products_fixture()))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app
        .oneshot(get("/products?category=Home&sort=rating&min_price=abc"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;

    assert!(body.contains(r#"hx-get="/products/list?category=Home&sort=rating""#));
    assert!(body.contains(r#"value="Home""#));
    assert!(body.contains(r#"<option value="rating" selected>"#));
    assert!(body.contains(r#"class="nav-link active" href="/products""#));
    assert_eq!(backend.hits(PRODUCTS), 0);
}

#[tokio::test]
async fn product_list_renders_cards() {
    let backend = spawn_backend(vec![(PRODUCTS, Canned::json(products_fixture()))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/products/list")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;

    assert!(body.contains(r#"data-stat="count">2<"#));
    assert!(body.contains("Desk Lamp"));
    assert!(body.contains("$19.99"));
    assert!(body.contains("$20<"));
    assert!(body.contains("⭐ 4.5 · 1200 reviews"));
    assert!(body.contains("⭐ 0 · 0 reviews"));
    assert!(body.contains(r#"<span class="pill pill-success">In Stock</span>"#));
    assert!(body.contains(r#"<span class="pill pill-warning">Only 2 left</span>"#));
    assert!(body.contains(r#"href="/products/2""#));
}

#[tokio::test]
async fn empty_product_list_shows_empty_state() {
    let backend = spawn_backend(vec![(PRODUCTS, Canned::json(json!([])))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/products/list")).await.unwrap();
    let body = response_body_string(res).await;

    assert!(body.contains("No products found."));
    assert!(!body.contains("Could not load data."));
}

#[tokio::test]
async fn filters_are_forwarded_with_backend_names() {
    let backend = spawn_backend(vec![(PRODUCTS, Canned::json(json!([])))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app
        .oneshot(get(
            "/products/list?category=Home&source=&min_price=10&max_price=oops&sort=price_asc&limit=20",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert!(req.starts_with("/api/products/?"));
    assert!(req.contains("categorie=Home"));
    assert!(req.contains("prix_min=10"));
    assert!(req.contains("sort_by=prix_asc"));
    assert!(req.contains("limit=20"));
    assert!(!req.contains("source="));
    assert!(!req.contains("prix_max"));
}

#[tokio::test]
async fn backend_failure_shows_error_state() {
    let backend = spawn_backend(vec![(
        PRODUCTS,
        Canned::raw(StatusCode::SERVICE_UNAVAILABLE, "down"),
    )])
    .await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/products/list")).await.unwrap();
    let body = response_body_string(res).await;

    assert!(body.contains("Could not load data."));
    assert!(body.contains("HTTP 503"));
    assert!(!body.contains("No products found."));
}

#[tokio::test]
async fn trending_list_renders_scores() {
    let backend = spawn_backend(vec![(
        "/api/analytics/trending",
        Canned::json(json!([
            { "id": 5, "nom": "Air Fryer", "prix": 59.9, "score": "91.5" }
        ])),
    )])
    .await;
    let app = routes::app(test_state(&backend.base));

    let res = app.clone().oneshot(get("/trending")).await.unwrap();
    let body = response_body_string(res).await;
    assert!(body.contains(r#"hx-get="/trending/list""#));

    let res = app.oneshot(get("/trending/list")).await.unwrap();
    let body = response_body_string(res).await;
    assert!(body.contains(r#"data-stat="count">1<"#));
    assert!(body.contains("Air Fryer"));
    assert!(body.contains("🔥 91.5"));
    assert!(body.contains("$59.9"));
    assert!(body.contains(r#"href="/products/5""#));
}

#[tokio::test]
async fn empty_trending_list_shows_empty_state() {
    let backend = spawn_backend(vec![("/api/analytics/trending", Canned::json(json!([])))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/trending/list")).await.unwrap();
    let body = response_body_string(res).await;
    assert!(body.contains("No trending products right now."));
}

#[tokio::test]
async fn trending_failure_shows_error_state() {
    let backend = spawn_backend(vec![(
        "/api/analytics/trending",
        Canned::raw(StatusCode::BAD_GATEWAY, "upstream"),
    )])
    .await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/trending/list")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;

    assert!(body.contains("Could not load data."));
    assert!(body.contains("HTTP 502"));
    assert!(!body.contains("No trending products right now."));
}
