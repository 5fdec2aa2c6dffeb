// food-client/src/http.rs
// HTTP client - network transport to the food-ordering backend

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::{CSRF_HEADER, SessionJar, SessionState, extract_csrf_token};
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// Paths are absolute backend paths such as `/api/cart`. An empty success
/// body decodes as JSON `null`, so callers expecting one ask for `Option<_>`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Bearer token attached to requests
    fn token(&self) -> Option<&str>;

    /// Current cookies and CSRF token, for transports that keep them
    fn session_state(&self) -> Option<SessionState> {
        None
    }

    /// Whether the session changed since the last call
    fn session_changed(&self) -> bool {
        false
    }

    /// Drop cookies and the CSRF token
    fn clear_session(&self) {}
}

/// Decode a success body. Empty bodies decode as `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, body = %text, "Failed to decode response body");
        ClientError::InvalidResponse(e.to_string())
    })
}

fn is_mutation(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Network HTTP client
///
/// Behaves like the browser the backend was written for: it keeps the
/// session cookies, reads the CSRF token from a rendered page on the first
/// mutation, and sends it back on every mutation after that.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    csrf_page: String,
    csrf_token: Arc<RwLock<Option<String>>>,
    csrf_changed: Arc<AtomicBool>,
    jar: Arc<SessionJar>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_session(config, None)
    }

    /// Client resuming `session`. A session of another backend is ignored.
    pub fn with_session(config: &ClientConfig, session: Option<SessionState>) -> ClientResult<Self> {
        let base_url = config.normalized_base_url().to_string();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(ClientError::Config(format!("invalid base URL: {}", config.base_url)));
        }

        let session = session.filter(|s| s.belongs_to(&base_url)).unwrap_or_default();
        let jar = Arc::new(SessionJar::from_cookies(session.cookies));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
            csrf_page: config.csrf_page.clone(),
            csrf_token: Arc::new(RwLock::new(session.csrf_token)),
            csrf_changed: Arc::new(AtomicBool::new(false)),
            jar,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn jar(&self) -> &SessionJar {
        &self.jar
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// CSRF token, read from the CSRF page on first use
    pub async fn csrf_token(&self) -> ClientResult<String> {
        let cached = self.csrf_token.read().clone();
        if let Some(token) = cached {
            return Ok(token);
        }
        self.refresh_csrf_token().await
    }

    /// Read a fresh CSRF token from the CSRF page
    pub async fn refresh_csrf_token(&self) -> ClientResult<String> {
        let url = self.url(&self.csrf_page);
        tracing::debug!(%url, "Fetching CSRF token");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let html = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::from_response(status, &html));
        }

        let token = extract_csrf_token(&html).ok_or_else(|| {
            tracing::error!(%url, "CSRF meta tag not found");
            ClientError::MissingCsrfToken
        })?;
        *self.csrf_token.write() = Some(token.clone());
        self.csrf_changed.store(true, Ordering::Release);
        Ok(token)
    }

    async fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "Request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        if is_mutation(&method) {
            let token = self.csrf_token().await?;
            req = req.header(CSRF_HEADER, token);
        }
        Ok(req)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await?;
        tracing::debug!(%status, %url, "Response");

        if !status.is_success() {
            let error = ClientError::from_response(status, &text);
            match error.body_text() {
                Some(body) => tracing::error!(%status, %url, body, "Non-JSON error response"),
                None => tracing::debug!(%status, %url, error = %error, "API error"),
            }
            return Err(error);
        }
        decode_body(&text)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await?;
        self.send(req).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await?.query(query);
        self.send(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await?.json(body);
        self.send(req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await?;
        self.send(req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).await?.json(body);
        self.send(req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).await?.json(body);
        self.send(req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path).await?;
        self.send(req).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path).await?.json(body);
        self.send(req).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn session_state(&self) -> Option<SessionState> {
        Some(SessionState {
            base_url: self.base_url.clone(),
            cookies: self.jar.snapshot(),
            csrf_token: self.csrf_token.read().clone(),
        })
    }

    fn session_changed(&self) -> bool {
        let cookies = self.jar.take_dirty();
        let csrf = self.csrf_changed.swap(false, Ordering::AcqRel);
        cookies || csrf
    }

    fn clear_session(&self) {
        self.jar.clear();
        if self.csrf_token.write().take().is_some() {
            self.csrf_changed.store(true, Ordering::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::response::MessageResponse;

    #[test]
    fn test_decode_empty_body_as_null() {
        let body: Option<MessageResponse> = decode_body("").unwrap();
        assert!(body.is_none());
        let body: Option<MessageResponse> = decode_body("  \n").unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn test_decode_invalid_body() {
        let err = decode_body::<MessageResponse>("<html>").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_mutation_methods() {
        assert!(!is_mutation(&Method::GET));
        assert!(is_mutation(&Method::POST));
        assert!(is_mutation(&Method::PATCH));
        assert!(is_mutation(&Method::DELETE));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = NetworkHttpClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_url_joining() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:8081/")).unwrap();
        assert_eq!(client.url("/api/cart"), "http://localhost:8081/api/cart");
        assert_eq!(client.url("api/cart"), "http://localhost:8081/api/cart");
    }

    #[test]
    fn test_resumes_matching_session_only() {
        let config = ClientConfig::new("http://localhost:8081");
        let mut state = SessionState::new("http://localhost:8081");
        state.cookies.insert("session".into(), "abc".into());
        state.csrf_token = Some("tok".into());

        let client = NetworkHttpClient::with_session(&config, Some(state.clone())).unwrap();
        assert_eq!(client.session_state(), Some(state));
        assert!(!client.session_changed());

        client.clear_session();
        assert!(client.session_changed());
        let cleared = client.session_state().unwrap();
        assert!(cleared.is_empty());

        let other = SessionState {
            base_url: "http://elsewhere".into(),
            ..Default::default()
        };
        let client = NetworkHttpClient::with_session(&config, Some(other)).unwrap();
        assert_eq!(client.session_state().unwrap().base_url, "http://localhost:8081");
    }
}
