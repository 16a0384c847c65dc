mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use trendboard::routes;

use common::{response_body_string, spawn_backend, test_state, Canned};

const SUMMARY: &str = "/api/analytics/dashboard/summary";

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn summary_fixture() -> serde_json::Value {
    let profits: Vec<_> = (0..7)
        .map(|i| {
            json!({
                "product_id": 100 + i,
                "product_name": format!("Deal {i}"),
                "aliexpress_price": 5,
                "amazon_price": "24.99",
                "marge_brute": 19.99,
                "marge_nette": 12.5,
                "roi_percentage": 150.04,
            })
        })
        .collect();

    json!({
        "total_products": 120,
        "top_trending": [
            { "id": 1, "nom": "Desk Lamp", "score": 87.26 },
            { "id": 2, "nom": "Yoga Mat", "score": "64" },
        ],
        "top_profit_opportunities": profits,
        "low_saturation_markets": [
            {
                "product_id": 9,
                "product_name": "Pet Fountain",
                "competitors_count": 3,
                "saturation_score": 12.5,
                "market_opportunity": "high",
            }
        ],
    })
}

#[tokio::test]
async fn dashboard_page_renders_shell_without_fetching() {
    let backend = spawn_backend(vec![(SUMMARY, Canned::json(summary_fixture()))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("<!doctype html>"));
    assert!(body.contains(r#"hx-get="/dashboard/summary""#));
    assert!(body.contains(r#"aria-busy="true""#));
    assert!(body.contains(r#"class="nav-link active" href="/""#));
    assert_eq!(backend.hits(SUMMARY), 0);
}

#[tokio::test]
async fn htmx_page_request_skips_layout() {
    let backend = spawn_backend(vec![]).await;
    let app = routes::app(test_state(&backend.base));

    let req = Request::builder()
        .uri("/")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(!body.contains("<!doctype html>"));
    assert!(body.contains(r#"id="dashboard-summary""#));
}

#[tokio::test]
async fn summary_renders_ranked_sections() {
    let backend = spawn_backend(vec![(SUMMARY, Canned::json(summary_fixture()))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/dashboard/summary")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;

    assert!(body.contains(r#"data-stat="total_products">120<"#));
    assert!(body.contains(r#"data-stat="trending_count">2<"#));
    assert!(body.contains(r#"data-stat="profit_count">7<"#));
    assert!(body.contains(r#"data-stat="market_count">1<"#));

    // trending: one decimal, detail link
    assert!(body.contains("Desk Lamp"));
    assert!(body.contains(">87.3<"));
    assert!(body.contains(">64.0<"));
    assert!(body.contains(r#"href="/products/1""#));

    // profit opportunities are capped at six cards
    assert!(body.contains("Deal 5"));
    assert!(!body.contains("Deal 6"));
    assert!(body.contains("Net margin <strong>$12.50</strong>"));
    assert!(body.contains("ROI <strong>150.0%</strong>"));
    assert!(body.contains("Buy $5 · Sell $24.99"));

    assert!(body.contains("Pet Fountain"));
    assert!(body.contains(r#"<span class="badge badge-success">high</span>"#));
    assert_eq!(backend.hits(SUMMARY), 1);
}

#[tokio::test]
async fn empty_summary_renders_zeroes_and_section_messages() {
    let backend = spawn_backend(vec![(SUMMARY, Canned::json(json!({})))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/dashboard/summary")).await.unwrap();
    let body = response_body_string(res).await;

    assert!(body.contains(r#"data-stat="total_products">0<"#));
    assert!(body.contains(r#"data-stat="trending_count">0<"#));
    assert!(body.contains("No trending products yet."));
    assert!(body.contains("No profit opportunities found."));
    assert!(body.contains("No low-saturation markets found."));
    assert!(!body.contains("Could not load data."));
}

#[tokio::test]
async fn server_error_renders_error_state() {
    let backend = spawn_backend(vec![(
        SUMMARY,
        Canned::raw(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"boom"}"#),
    )])
    .await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/dashboard/summary")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;

    assert!(body.contains("Could not load data."));
    assert!(body.contains("HTTP 500"));
    assert!(!body.contains("data-stat"));
}

#[tokio::test]
async fn malformed_body_renders_error_state() {
    let backend = spawn_backend(vec![(SUMMARY, Canned::raw(StatusCode::OK, "<html>gateway</html>"))]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/dashboard/summary")).await.unwrap();
    let body = response_body_string(res).await;

    assert!(body.contains("Could not load data."));
    assert!(body.contains("could not be read"));
}

#[tokio::test]
async fn unreachable_backend_renders_error_state() {
    // nothing listens on port 1
    let app = routes::app(test_state("http://127.0.0.1:1"));

    let res = app.oneshot(get("/dashboard/summary")).await.unwrap();
    let body = response_body_string(res).await;

    assert!(body.contains("Could not load data."));
    assert!(body.contains("unreachable"));
}

#[tokio::test]
async fn health_endpoints() {
    let backend = spawn_backend(vec![(
        "/health",
        Canned::json(json!({ "status": "healthy", "database": "connected" })),
    )])
    .await;
    let app = routes::app(test_state(&backend.base));

    let res = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(response_body_string(res).await, "ok");

    let res = app.oneshot(get("/health/api")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;
    assert!(body.contains("API healthy"));
    assert!(body.contains("db: connected"));
}

#[tokio::test]
async fn unhealthy_backend_reports_503() {
    let backend = spawn_backend(vec![]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/health/api")).await.unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_body_string(res).await;
    assert!(body.contains("API unreachable"));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let backend = spawn_backend(vec![]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = response_body_string(res).await;
    assert!(body.contains("This page does not exist."));
}

#[tokio::test]
async fn stylesheet_is_served_from_the_binary() {
    let backend = spawn_backend(vec![]).await;
    let app = routes::app(test_state(&backend.base));

    let res = app.oneshot(get("/static/app.css")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );
    let body = response_body_string(res).await;
    assert!(body.contains(".badge-success"));
}
