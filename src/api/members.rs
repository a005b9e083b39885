use axum::{
    extract::{Json, Path, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use crate::proxy::auth::bearer_token;
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

pub async fn list_junta_members(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/members/junta/{}", id),
            &token,
            "Failed to fetch members",
        )
        .await
}

/// Register a member into a junta. Both ids travel as path segments; the
/// optional body (member details) is forwarded as-is.
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Path((junta_id, member_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    let path = format!("/members/{}/add/{}", junta_id, member_id);
    let body = body.map(|Json(b)| b).unwrap_or(Value::Null);
    state
        .upstream
        .post(&path, &token, &body, "Failed to add member")
        .await
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    Path((junta_id, member_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .delete(
            &format!("/members/{}/{}", junta_id, member_id),
            &token,
            "Failed to remove member",
        )
        .await
}

/// Shares held by a member, looked up by DNI.
pub async fn list_member_acciones(
    State(state): State<Arc<AppState>>,
    Path(dni): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/members/dni/{}/acciones", dni),
            &token,
            "Failed to fetch member acciones",
        )
        .await
}

/// Loans held by a member, looked up by DNI.
pub async fn list_member_prestamos(
    State(state): State<Arc<AppState>>,
    Path(dni): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/members/dni/{}/prestamos", dni),
            &token,
            "Failed to fetch member prestamos",
        )
        .await
}
