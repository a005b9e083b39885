//! Error taxonomy for the proxy layer.
//!
//! Every handler converts all failures into one of these envelopes; nothing
//! escapes to axum's default error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// A proxied request failure, rendered as `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No bearer token on the inbound request. Always short-circuits before
    /// any upstream call.
    #[error("Unauthorized")]
    Unauthorized,

    /// Role-gated route and the caller lacks the admin role.
    #[error("Forbidden")]
    Forbidden,

    /// The upstream answered with a non-success status. The status is
    /// mirrored to the caller; the message comes from the upstream body or a
    /// resource-specific fallback.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Network or parse failure while talking to the upstream. Reported as a
    /// generic 500 and never retried.
    #[error("Internal Server Error")]
    Transport(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProxyError::Forbidden => StatusCode::FORBIDDEN,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Local rejection of a malformed request, same envelope shape.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ProxyError::Upstream {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Transport(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let ProxyError::Transport(detail) = &self {
            tracing::error!("upstream transport failure: {}", detail);
        }
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ProxyError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ProxyError::Transport("connection refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let upstream = ProxyError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "Junta not found".into(),
        };
        assert_eq!(upstream.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_transport_message_stays_generic() {
        let err = ProxyError::Transport("dns error: backend.local".into());
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
