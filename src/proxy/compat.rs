//! Legacy delete-by-body-id adapter.
//!
//! The original frontend sends DELETE requests for acciones, multas and
//! prestamos with the target id in the request body; the backend expects the
//! id as a path segment. This shim keeps that contract in one place instead
//! of inlining it per handler.

use serde_json::Value;

use super::error::ProxyError;

/// Build the upstream delete path from a body-supplied id.
///
/// Accepts `{"id": "..."}` with a string or numeric id. A missing or empty
/// id is rejected locally with 400 rather than forwarded as a bogus path
/// segment.
pub fn delete_path_from_body(resource: &str, body: Option<&Value>) -> Result<String, ProxyError> {
    let id = body
        .and_then(|b| b.get("id"))
        .and_then(|id| match id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .ok_or_else(|| ProxyError::bad_request(format!("Missing id for {} delete", resource)))?;

    Ok(format!("/{}/{}", resource, id))
}
