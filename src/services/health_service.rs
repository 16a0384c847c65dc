use serde_json::json;

use crate::{errors::ApiError, models::BackendHealth, AppState};

pub async fn check_backend(state: &AppState) -> Result<BackendHealth, ApiError> {
    let result = state.api.health().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "analytics health check failed");
    }
    result
}

pub fn is_healthy(result: &Result<BackendHealth, ApiError>) -> bool {
    matches!(result, Ok(h) if h.status == "healthy")
}

/// Context for `partials/api_health`.
pub fn health_ctx(base_url: &str, result: &Result<BackendHealth, ApiError>) -> serde_json::Value {
    match result {
        Ok(h) => json!({
            "base_url": base_url,
            "healthy": h.status == "healthy",
            "status": h.status,
            "database": h.database,
            "detail": h.error,
        }),
        Err(e) => json!({
            "base_url": base_url,
            "healthy": false,
            "status": "unreachable",
            "detail": e.reason(),
        }),
    }
}
