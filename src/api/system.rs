use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::proxy::auth::bearer_token;
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

/// Liveness probe. Answers regardless of authentication state and is never
/// cached by intermediaries.
pub async fn health_check() -> Response {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(serde_json::json!({ "status": "healthy" })),
    )
        .into_response()
}

/// Backend deployment info.
pub async fn get_info(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/info", &token, "Failed to fetch info").await
}
