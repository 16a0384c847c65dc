//! Shared helpers: a throwaway analytics backend on a random port and an
//! `AppState` pointed at it.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use http_body_util::BodyExt;
use trendboard::{config, AppState};

#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Canned {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<String, Canned>>,
    log: Arc<Mutex<Vec<String>>>,
}

pub struct MockBackend {
    pub base: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// Every request seen so far, as `path` or `path?query`.
    pub fn requests(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.split('?').next() == Some(path))
            .count()
    }
}

async fn answer(State(mock): State<MockState>, uri: Uri) -> Response {
    mock.log.lock().unwrap().push(uri.to_string());

    let Some(canned) = mock.routes.get(uri.path()).cloned() else {
        return (StatusCode::NOT_FOUND, r#"{"detail":"Not Found"}"#).into_response();
    };

    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

/// Start a backend answering `routes` (keyed by path, query ignored). Unknown
/// paths answer 404.
pub async fn spawn_backend(routes: Vec<(&str, Canned)>) -> MockBackend {
    let state = MockState {
        routes: Arc::new(
            routes
                .into_iter()
                .map(|(path, canned)| (path.to_string(), canned))
                .collect(),
        ),
        log: Arc::default(),
    };
    let log = state.log.clone();

    let app = Router::new().fallback(answer).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base: format!("http://{addr}"),
        log,
    }
}

pub fn test_state(api_base: &str) -> AppState {
    let mut settings = config::load();
    settings.api_url = api_base.to_string();
    settings.public_origin = None;
    settings.request_timeout_secs = 5;
    settings.resolve_api_base();

    AppState::new(settings).expect("app state")
}

pub async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}
