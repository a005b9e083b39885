//! Upstream request building, forwarding and response normalization.
//!
//! Every proxied route funnels through [`UpstreamClient::forward`]: join the
//! configured base URL with the resource path, attach the bearer token, send,
//! and normalize the reply. Failures are never retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Method;
use serde_json::Value;

use crate::config::GatewayConfig;

use super::error::ProxyError;

/// A normalized upstream success: mirrored status plus the verbatim JSON body.
#[derive(Debug, Clone)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for ProxyReply {
    fn into_response(self) -> Response {
        // 204 and friends carry no payload.
        if self.body.is_null() {
            self.status.into_response()
        } else {
            (self.status, Json(self.body)).into_response()
        }
    }
}

/// HTTP client for the juntas backend.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    debug: bool,
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, String> {
        url::Url::parse(&config.upstream_base_url)
            .map_err(|e| format!("Invalid upstream base URL '{}': {}", config.upstream_base_url, e))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            debug: config.debug,
        })
    }

    /// Target URL for a resource path. Path parameters are substituted by the
    /// callers verbatim; no extra encoding happens here.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str, token: &str, fallback: &str) -> Result<ProxyReply, ProxyError> {
        self.forward(Method::GET, path, token, None, fallback).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: &str,
        body: &Value,
        fallback: &str,
    ) -> Result<ProxyReply, ProxyError> {
        self.forward(Method::POST, path, token, Some(body), fallback).await
    }

    pub async fn put(
        &self,
        path: &str,
        token: &str,
        body: &Value,
        fallback: &str,
    ) -> Result<ProxyReply, ProxyError> {
        self.forward(Method::PUT, path, token, Some(body), fallback).await
    }

    pub async fn delete(&self, path: &str, token: &str, fallback: &str) -> Result<ProxyReply, ProxyError> {
        self.forward(Method::DELETE, path, token, None, fallback).await
    }

    /// The generic proxy dispatch. Non-success statuses are mirrored with an
    /// error envelope; success bodies pass through unmodified.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
        fallback: &str,
    ) -> Result<ProxyReply, ProxyError> {
        let url = self.endpoint(path);
        if self.debug {
            tracing::debug!("forwarding {} {}", method, url);
        }

        let mut request = self.http.request(method, &url).bearer_auth(token);
        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let text = response.text().await?;

        if self.debug {
            tracing::debug!("upstream {} -> {}", url, status);
        }

        if !status.is_success() {
            let message = extract_error_message(&text).unwrap_or_else(|| fallback.to_string());
            return Err(ProxyError::Upstream { status, message });
        }

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ProxyError::Transport(format!("invalid upstream JSON: {}", e)))?
        };

        Ok(ProxyReply { status, body })
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// The backend answers with `{"message": ...}` or `{"error": ...}`; anything
/// else is treated as opaque and the caller falls back to its default.
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            // NestJS validation errors arrive as {"message": ["...", ...]}
            Some(Value::Array(items)) => {
                let joined: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                if !joined.is_empty() {
                    return Some(joined.join(", "));
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        UpstreamClient::new(&GatewayConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_join() {
        let upstream = client("http://backend:9000");
        assert_eq!(upstream.endpoint("/juntas"), "http://backend:9000/juntas");
    }

    #[test]
    fn test_endpoint_join_trailing_slash() {
        let upstream = client("http://backend:9000/");
        assert_eq!(
            upstream.endpoint("/multas/junta/7"),
            "http://backend:9000/multas/junta/7"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(UpstreamClient::new(&GatewayConfig::new("not a url")).is_err());
    }

    #[test]
    fn test_extract_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Junta not found"}"#),
            Some("Junta not found".to_string())
        );
    }

    #[test]
    fn test_extract_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"Invalid member"}"#),
            Some("Invalid member".to_string())
        );
    }

    #[test]
    fn test_extract_message_array() {
        assert_eq!(
            extract_error_message(r#"{"message":["dni required","name required"]}"#),
            Some("dni required, name required".to_string())
        );
    }

    #[test]
    fn test_opaque_body_gives_none() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message(r#"{"detail":"nope"}"#), None);
    }
}
