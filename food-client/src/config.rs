//! Client configuration

use std::path::PathBuf;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Default directory of the persisted session
pub const DEFAULT_SESSION_DIR: &str = ".food-session";

/// Page whose markup carries the `csrf-token` meta tag
pub const DEFAULT_CSRF_PAGE: &str = "/login";

/// Client configuration for connecting to the food-ordering backend
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8081")
    pub base_url: String,

    /// Bearer token sent on every request when present
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where cookies and the CSRF token are kept between runs.
    /// `None` keeps the session in memory only.
    pub session_dir: Option<PathBuf>,

    /// Path of the page the CSRF token is read from
    pub csrf_page: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            session_dir: None,
            csrf_page: DEFAULT_CSRF_PAGE.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `FOOD_API_URL`: backend address
    /// - `FOOD_TOKEN`: bearer token
    /// - `FOOD_TIMEOUT_SECS`: request timeout
    /// - `FOOD_SESSION_DIR`: session directory
    /// - `FOOD_CSRF_PAGE`: page carrying the CSRF meta tag
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FOOD_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            token: std::env::var("FOOD_TOKEN").ok().filter(|s| !s.is_empty()),
            timeout: std::env::var("FOOD_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            session_dir: Some(
                std::env::var("FOOD_SESSION_DIR")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR)),
            ),
            csrf_page: std::env::var("FOOD_CSRF_PAGE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CSRF_PAGE.into()),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the session under `dir`
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    /// Keep the session in memory only
    pub fn without_session_dir(mut self) -> Self {
        self.session_dir = None;
        self
    }

    pub fn with_csrf_page(mut self, page: impl Into<String>) -> Self {
        self.csrf_page = page.into();
        self
    }

    /// Base URL without trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://food.local:9000/")
            .with_token("abc")
            .with_timeout(5)
            .with_session_dir("/tmp/food")
            .with_csrf_page("/register");

        assert_eq!(config.normalized_base_url(), "http://food.local:9000");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.session_dir, Some(PathBuf::from("/tmp/food")));
        assert_eq!(config.csrf_page, "/register");

        let config = config.without_session_dir();
        assert!(config.session_dir.is_none());
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
        assert_eq!(config.csrf_page, "/login");
    }
}
