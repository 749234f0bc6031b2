//! Content-negotiation API versioning.
//!
//! Clients select an API version by sending a vendor media type in the
//! `Accept` header (`application/vnd.todos.v2+json`). Each versioned route
//! scope carries an [`ApiVersion`] guard; actix evaluates guards in
//! registration order, so the default-flagged version is registered last and
//! picks up every request without an explicit version header.

use actix_web::guard::{Guard, GuardContext};
use actix_web::http::header;
use actix_web::http::header::HeaderMap;

/// Vendor token embedded in the media type.
const VENDOR: &str = "todos";

/// A registered API version: a label plus a default flag.
#[derive(Debug, Clone)]
pub struct ApiVersion {
    version: String,
    default: bool,
}

impl ApiVersion {
    pub fn new(version: impl Into<String>, default: bool) -> Self {
        Self {
            version: version.into(),
            default,
        }
    }

    fn media_type(&self) -> String {
        format!("application/vnd.{VENDOR}.{}+json", self.version)
    }

    /// True when the Accept header names this version's vendor media type;
    /// any other header value (or none at all) falls back to the default flag.
    pub fn matches(&self, headers: &HeaderMap) -> bool {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok());
        match accept {
            Some(accept) if accept.contains(&self.media_type()) => true,
            _ => self.default,
        }
    }
}

impl Guard for ApiVersion {
    fn check(&self, ctx: &GuardContext<'_>) -> bool {
        self.matches(ctx.head().headers())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::header;
    use actix_web::http::header::{HeaderMap, HeaderValue};

    use super::ApiVersion;

    fn headers_with_accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_default_version_matches_without_accept_header() {
        let version = ApiVersion::new("v1", true);
        assert!(version.matches(&HeaderMap::new()));
    }

    #[test]
    fn test_non_default_version_rejects_other_accept_header() {
        let version = ApiVersion::new("v1", false);
        let headers = headers_with_accept("application/vnd.todos.v2+json");
        assert!(!version.matches(&headers));
    }

    #[test]
    fn test_explicit_version_header_matches() {
        let version = ApiVersion::new("v2", false);
        let headers = headers_with_accept("application/vnd.todos.v2+json");
        assert!(version.matches(&headers));
    }

    #[test]
    fn test_default_version_matches_unrelated_accept_header() {
        let version = ApiVersion::new("v1", true);
        let headers = headers_with_accept("application/json");
        assert!(version.matches(&headers));
    }

    #[test]
    fn test_version_token_found_inside_compound_accept_header() {
        let version = ApiVersion::new("v2", false);
        let headers = headers_with_accept("text/html, application/vnd.todos.v2+json;q=0.9");
        assert!(version.matches(&headers));
    }
}
