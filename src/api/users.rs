use axum::{
    extract::{Json, Path, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use crate::proxy::auth::{bearer_token, require_admin};
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/users", &token, "Failed to fetch users").await
}

/// Change a user's role. Admin only; non-admin callers are rejected with 403
/// before any upstream call.
pub async fn update_user_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    require_admin(&headers)?;
    state
        .upstream
        .put(
            &format!("/users/{}/role", id),
            &token,
            &body,
            "Failed to update user role",
        )
        .await
}
