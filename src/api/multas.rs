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

pub async fn list_multas(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(filter): Query<JuntaFilter>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &filter.upstream_path("multas"),
            &token,
            "Failed to fetch multas",
        )
        .await
}

pub async fn create_multa(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .post("/multas", &token, &body, "Failed to create multa")
        .await
}

/// Waive a fine. Legacy contract: the target id arrives in the request body.
pub async fn delete_multa(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    let path = compat::delete_path_from_body("multas", body.as_ref().map(|b| &b.0))?;
    state
        .upstream
        .delete(&path, &token, "Failed to delete multa")
        .await
}
