use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use std::sync::Arc;

use crate::proxy::auth::bearer_token;
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

/// Pooled share capital across all juntas.
pub async fn get_capital_social(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get("/capital/social", &token, "Failed to fetch capital social")
        .await
}

pub async fn get_junta_capital_social(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/capital/social/junta/{}", id),
            &token,
            "Failed to fetch capital social",
        )
        .await
}
