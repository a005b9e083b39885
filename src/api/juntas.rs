use axum::{
    extract::{Json, Path, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use crate::proxy::auth::bearer_token;
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

/// List all juntas.
pub async fn list_juntas(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/juntas", &token, "Failed to fetch juntas").await
}

/// Create a junta.
pub async fn create_junta(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .post("/juntas", &token, &body, "Failed to create junta")
        .await
}

pub async fn get_junta(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(&format!("/juntas/{}", id), &token, "Failed to fetch junta")
        .await
}

/// Delete a junta. The id comes from the path; this route does not use the
/// legacy body-id shim.
pub async fn delete_junta(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .delete(&format!("/juntas/{}", id), &token, "Failed to delete junta")
        .await
}

/// Shares purchased within a junta.
pub async fn list_junta_acciones(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/acciones/junta/{}", id),
            &token,
            "Failed to fetch acciones",
        )
        .await
}

/// Record a share purchase for a junta.
///
/// The backend expects the junta id inside the body, so it is injected from
/// the path before forwarding, overriding whatever the caller sent.
pub async fn create_junta_accion(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    if let Some(obj) = body.as_object_mut() {
        obj.insert("junta".to_string(), Value::String(id));
    }
    state
        .upstream
        .post("/acciones/", &token, &body, "Failed to create accion")
        .await
}

/// Levy a fine within a junta. Same body-injection contract as acciones,
/// with the backend's `juntaId` field name.
pub async fn create_junta_multa(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    if let Some(obj) = body.as_object_mut() {
        obj.insert("juntaId".to_string(), Value::String(id));
    }
    state
        .upstream
        .post("/multas", &token, &body, "Failed to create multa")
        .await
}
