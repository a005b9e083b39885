use axum::{
    extract::{Json, Path, Query, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::sync::Arc;

use super::common::JuntaFilter;
use crate::proxy::auth::bearer_token;
use crate::proxy::{compat, ProxyError, ProxyReply};
use crate::state::AppState;

pub async fn list_prestamos(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(filter): Query<JuntaFilter>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &filter.upstream_path("prestamos"),
            &token,
            "Failed to fetch prestamos",
        )
        .await
}

/// Issue a loan. Amortization and interest live entirely in the backend;
/// the body passes through untouched.
pub async fn create_prestamo(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .post("/prestamos", &token, &body, "Failed to create prestamo")
        .await
}

/// Cancel a loan. Legacy contract: the target id arrives in the request body.
pub async fn delete_prestamo(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    let path = compat::delete_path_from_body("prestamos", body.as_ref().map(|b| &b.0))?;
    state
        .upstream
        .delete(&path, &token, "Failed to delete prestamo")
        .await
}

/// Repayment history for a loan.
pub async fn list_pagos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/prestamos/{}/pagos", id),
            &token,
            "Failed to fetch pagos",
        )
        .await
}

/// Record a repayment against a loan.
pub async fn create_pago(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .post(
            &format!("/prestamos/{}/pagos", id),
            &token,
            &body,
            "Failed to create pago",
        )
        .await
}

/// All repayments across a junta's loans.
pub async fn list_junta_pagos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<ProxyReply, ProxyError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .get(
            &format!("/prestamos/junta/{}/pagos", id),
            &token,
            "Failed to fetch pagos",
        )
        .await
}
