// food-client/src/testing.rs
// In-memory HTTP client for unit tests

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{HttpClient, decode_body};
use crate::{ClientError, ClientResult, FoodClient};

/// Canned backend reply
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(Value),
    /// 2xx with an empty body
    Empty,
    /// 2xx with a raw body
    Text(String),
    /// Non-2xx
    Error { status: u16, body: String },
}

/// A request the client issued
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: Option<Value>,
    pub body: Option<Value>,
}

impl Call {
    pub fn route(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Replays replies in order and records every call
#[derive(Debug, Default)]
pub(crate) struct MockHttpClient {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
    cleared: Mutex<bool>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, value: Value) -> Self {
        self.replies.lock().push_back(Reply::Json(value));
        self
    }

    pub fn empty(self) -> Self {
        self.replies.lock().push_back(Reply::Empty);
        self
    }

    pub fn text(self, body: &str) -> Self {
        self.replies.lock().push_back(Reply::Text(body.to_string()));
        self
    }

    pub fn error(self, status: u16, body: &str) -> Self {
        self.replies.lock().push_back(Reply::Error {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Error reply with a `{"error": message}` body
    pub fn api_error(self, status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        self.error(status, &body)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.calls.lock().iter().map(Call::route).collect()
    }

    pub fn was_cleared(&self) -> bool {
        *self.cleared.lock()
    }

    pub fn into_client(self) -> FoodClient<MockHttpClient> {
        FoodClient::with_http(self)
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        query: Option<Value>,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().push(Call {
            method,
            path: path.to_string(),
            query,
            body,
        });

        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {method} {path}"));
        match reply {
            Reply::Json(value) => decode_body(&value.to_string()),
            Reply::Empty => decode_body(""),
            Reply::Text(text) => decode_body(&text),
            Reply::Error { status, body } => {
                let status = StatusCode::from_u16(status).expect("valid status");
                Err(ClientError::from_response(status, &body))
            }
        }
    }
}

fn to_value<B: Serialize>(body: &B) -> Option<Value> {
    Some(serde_json::to_value(body).expect("serializable body"))
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("GET", path, None, None)
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.respond("GET", path, to_value(query), None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("POST", path, None, to_value(body))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("POST", path, None, None)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("PUT", path, None, to_value(body))
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("PATCH", path, None, to_value(body))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("DELETE", path, None, None)
    }

    async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.respond("DELETE", path, None, to_value(body))
    }

    fn token(&self) -> Option<&str> {
        None
    }

    fn clear_session(&self) {
        *self.cleared.lock() = true;
    }
}
