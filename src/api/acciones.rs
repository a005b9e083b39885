use axum::{
    extract::{Json, Query, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use super::common::JuntaFilter;
use crate::proxy::auth::bearer_token;
use crate::proxy::{compat, ProxyError, ProxyReply};
use crate::state::AppState;

pub async fn list_acciones(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(filter): Query<JuntaFilter>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &filter.upstream_path("acciones"),
            &token,
            "Failed to fetch acciones",
        )
        .await
}

/// Remove a share purchase. Legacy contract: the target id arrives in the
/// request body and is forwarded as a path segment.
pub async fn delete_accion(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    let path = compat::delete_path_from_body("acciones", body.as_ref().map(|b| &b.0))?;
    state
        .upstream
        .delete(&path, &token, "Failed to delete accion")
        .await
}
