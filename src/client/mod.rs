//! Typed data-access client for the gateway.
//!
//! Mirrors the contract the browser hooks rely on: every call is routed under
//! the `/api` prefix, queries are gated until a session token is installed,
//! and successful mutations invalidate cached queries by an explicit resource
//! tag rather than by query-key string matching.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use reqwest::Method;
use serde_json::Value;
use tokio::sync::RwLock;

/// Logical resource groups used for cache tagging and invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Juntas,
    Acciones,
    CapitalSocial,
    Members,
    Multas,
    Prestamos,
    Pagos,
    Users,
    Info,
    Asistencia,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No session token installed yet; queries are disabled until sign-in.
    #[error("not authenticated")]
    Unauthenticated,

    /// The gateway answered with an error envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    resource: Resource,
    fetched_at: DateTime<Utc>,
    value: Value,
}

/// Cache-aware client over the gateway's `/api` surface.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    cache: DashMap<String, CacheEntry>,
    max_age: chrono::Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, String> {
        let base_url = base_url.into();
        url::Url::parse(&base_url).map_err(|e| format!("Invalid gateway URL '{}': {}", base_url, e))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            cache: DashMap::new(),
            max_age: chrono::Duration::seconds(default_max_age_secs()),
        })
    }

    /// Override how long cached query results stay fresh.
    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age = chrono::Duration::seconds(secs);
        self
    }

    /// Install the session token; queries are enabled from here on.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Drop the session. Cached data from the signed-in session goes with it.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
        self.cache.clear();
    }

    /// Route every endpoint under the `/api` prefix.
    pub fn normalize_path(path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path == "api" || path.starts_with("api/") {
            format!("/{}", path)
        } else {
            format!("/api/{}", path)
        }
    }

    /// GET a resource, serving repeated reads from the tagged cache.
    pub async fn query(&self, resource: Resource, path: &str) -> Result<Value, ClientError> {
        let token = self.require_token().await?;
        let path = Self::normalize_path(path);

        if let Some(entry) = self.cache.get(&path) {
            if Utc::now() - entry.fetched_at < self.max_age {
                return Ok(entry.value.clone());
            }
        }

        let value = self.send(Method::GET, &path, &token, None).await?;
        self.cache.insert(
            path,
            CacheEntry {
                resource,
                fetched_at: Utc::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }

    /// Issue a mutation; on success every cached query tagged with the same
    /// resource is invalidated.
    pub async fn mutate(
        &self,
        resource: Resource,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<Value, ClientError> {
        let token = self.require_token().await?;
        let path = Self::normalize_path(path);
        let value = self.send(method, &path, &token, Some(body)).await?;
        self.invalidate(resource);
        Ok(value)
    }

    /// Drop every cached entry carrying the given tag.
    pub fn invalidate(&self, resource: Resource) {
        self.cache.retain(|_, entry| entry.resource != resource);
    }

    /// Cached value for a path, if any. Mostly useful in tests.
    pub fn cached(&self, path: &str) -> Option<Value> {
        self.cache
            .get(&Self::normalize_path(path))
            .map(|entry| entry.value.clone())
    }

    async fn require_token(&self) -> Result<String, ClientError> {
        self.token
            .read()
            .await
            .clone()
            .ok_or(ClientError::Unauthenticated)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status >= 400 {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(ClientError::Api { status, message });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ClientError::Transport(e.to_string()))
    }
}

fn default_max_age_secs() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_path() {
        assert_eq!(ApiClient::normalize_path("juntas"), "/api/juntas");
    }

    #[test]
    fn test_normalize_slash_path() {
        assert_eq!(ApiClient::normalize_path("/multas"), "/api/multas");
    }

    #[test]
    fn test_normalize_already_prefixed() {
        assert_eq!(ApiClient::normalize_path("/api/juntas"), "/api/juntas");
        assert_eq!(ApiClient::normalize_path("api/users"), "/api/users");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
