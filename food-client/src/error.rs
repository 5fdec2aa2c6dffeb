//! Client error types

use reqwest::StatusCode;
use shared::KnownError;
use shared::response::ApiErrorBody;
use thiserror::Error;

use crate::messages;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx with a JSON body. `message` is the body's `error` field.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// 401 with a non-JSON body
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403 with a non-JSON body
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404 with a non-JSON body
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 with a non-JSON body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-2xx status with a non-JSON body
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// 2xx whose body does not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected before any request was sent
    #[error("{0}")]
    Input(String),

    /// The response lacks data the screen needs
    #[error("{0}")]
    Incomplete(String),

    /// The CSRF page has no `csrf-token` meta tag
    #[error("{}", messages::CSRF_TOKEN_MISSING)]
    MissingCsrfToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::Incomplete(message.into())
    }

    /// Classify a failed response from its status and raw body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .filter(serde_json::Value::is_object);
        if let Some(value) = json {
            let parsed: ApiErrorBody = serde_json::from_value(value).unwrap_or_default();
            return Self::Api {
                status: status.as_u16(),
                message: parsed.error.filter(|m| !m.trim().is_empty()),
            };
        }

        let body = body.to_string();
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::BAD_REQUEST => Self::BadRequest(body),
            _ => Self::Server {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// Text shown to the user: the backend's or the client's own message if
    /// there is one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Input(message) | Self::Incomplete(message) => message.clone(),
            Self::MissingCsrfToken => messages::CSRF_TOKEN_MISSING.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Raw body of a failed response that was not JSON
    pub fn body_text(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::BadRequest(body)
            | Self::Server { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// HTTP status of a failed response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The backend message, if it is one the client recognises
    pub fn known(&self) -> Option<KnownError> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => KnownError::from_message(message),
            _ => None,
        }
    }

    pub fn is_known(&self, known: KnownError) -> bool {
        self.known() == Some(known)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_body() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Количество должно быть больше 0"}"#,
        );
        assert!(matches!(err, ClientError::Api { status: 400, .. }));
        assert!(err.is_known(KnownError::QuantityMustBePositive));
        assert_eq!(
            err.user_message("Не удалось обновить количество"),
            "Количество должно быть больше 0"
        );
    }

    #[test]
    fn test_json_without_error_field_uses_fallback() {
        let err = ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": 1}"#);
        assert!(matches!(err, ClientError::Api { message: None, .. }));
        assert_eq!(err.user_message("Не удалось загрузить корзину"), "Не удалось загрузить корзину");
        assert!(err.known().is_none());
    }

    #[test]
    fn test_non_json_body_is_classified_by_status() {
        let err = ClientError::from_response(StatusCode::NOT_FOUND, "404 page not found");
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.body_text(), Some("404 page not found"));
        assert_eq!(err.status(), Some(404));

        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, "nope");
        assert!(matches!(err, ClientError::Unauthorized(_)));

        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "<html>");
        assert!(matches!(err, ClientError::Server { status: 502, .. }));
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_json_array_is_not_an_error_body() {
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, "[1, 2]");
        assert!(matches!(err, ClientError::BadRequest(_)));
    }

    #[test]
    fn test_input_and_csrf_messages_win() {
        let err = ClientError::input("Пожалуйста, заполните все поля");
        assert_eq!(err.user_message("x"), "Пожалуйста, заполните все поля");
        assert_eq!(ClientError::MissingCsrfToken.user_message("x"), "CSRF-токен не найден");
    }
}
