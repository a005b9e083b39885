//! Bearer-token extraction and the admin gate.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use super::error::ProxyError;

/// Session-derived token header, set by the identity layer in front of the
/// gateway. Used as a fallback when no `Authorization` header is present.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Role claim header, set by the identity layer. Checked only on role-gated
/// routes.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Extract the bearer credential for an inbound request.
///
/// Precedence: explicit `Authorization: Bearer <token>` header, then the
/// session token header. An empty token counts as absent.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, ProxyError> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    Err(ProxyError::Unauthorized)
}

/// Reject with 403 unless the identity layer marked the caller as admin.
pub fn require_admin(headers: &HeaderMap) -> Result<(), ProxyError> {
    match headers.get(USER_ROLE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(role) if role.eq_ignore_ascii_case("admin") => Ok(()),
        _ => Err(ProxyError::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_header() {
        let headers = headers_with("authorization", "Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_session_token_fallback() {
        let headers = headers_with(SESSION_TOKEN_HEADER, "sess-456");
        assert_eq!(bearer_token(&headers).unwrap(), "sess-456");
    }

    #[test]
    fn test_authorization_wins_over_session() {
        let mut headers = headers_with("authorization", "Bearer abc");
        headers.insert(SESSION_TOKEN_HEADER, HeaderValue::from_static("sess"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_absent_token() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(ProxyError::Unauthorized)
        ));
    }

    #[test]
    fn test_empty_bearer_is_absent() {
        let headers = headers_with("authorization", "Bearer ");
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn test_non_bearer_scheme_is_absent() {
        let headers = headers_with("authorization", "Basic dXNlcjpwdw==");
        assert!(bearer_token(&headers).is_err());
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&headers_with(USER_ROLE_HEADER, "admin")).is_ok());
        assert!(require_admin(&headers_with(USER_ROLE_HEADER, "Admin")).is_ok());
        assert!(matches!(
            require_admin(&headers_with(USER_ROLE_HEADER, "member")),
            Err(ProxyError::Forbidden)
        ));
        assert!(require_admin(&HeaderMap::new()).is_err());
    }
}
