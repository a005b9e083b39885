//! Gateway configuration.
//!
//! Built once at startup and handed to [`crate::state::AppState::new`]; the
//! running gateway never mutates it.

use serde::{Deserialize, Serialize};

/// Gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the juntas backend (no trailing slash required).
    pub upstream_base_url: String,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Log upstream targets and statuses at debug level.
    #[serde(default)]
    pub debug: bool,
}

impl GatewayConfig {
    pub fn new(upstream_base_url: impl Into<String>) -> Self {
        Self {
            upstream_base_url: upstream_base_url.into(),
            ..Self::default()
        }
    }

    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("BACKEND_URL") {
            config.upstream_base_url = url;
        }
        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.request_timeout = secs;
            }
        }
        if let Ok(debug) = std::env::var("DEBUG") {
            config.debug = debug == "1" || debug.eq_ignore_ascii_case("true");
        }
        config
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: default_upstream_base_url(),
            request_timeout: default_request_timeout(),
            debug: false,
        }
    }
}

fn default_upstream_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
