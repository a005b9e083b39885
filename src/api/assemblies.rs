use axum::{
    extract::{Json, Path, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use crate::proxy::auth::bearer_token;
use crate::proxy::{ProxyError, ProxyReply};
use crate::state::AppState;

/// Record attendance for an assembly.
pub async fn update_asistencia(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .put(
            &format!("/assemblies/{}/asistencia", id),
            &token,
            &body,
            "Failed to update asistencia",
        )
        .await
}
