//! Login, registration, logout and session checks

use shared::Role;
use shared::SessionInfo;
use shared::request::{LoginRequest, RegisterRequest};
use shared::response::{LoginResponse, MessageResponse};

use super::{NextStep, routes};
use crate::http::HttpClient;
use crate::messages::{self, Action};
use crate::{ClientError, ClientResult, FoodClient};

/// Successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub message: String,
    pub role: Role,
    /// Landing page of `role`
    pub redirect: &'static str,
}

/// Registration form as filled in by the user
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    /// Only meaningful for restaurant accounts
    pub cuisine_type: Option<String>,
}

impl Registration {
    /// Validate and turn into the request body
    pub fn into_request(self) -> ClientResult<RegisterRequest> {
        let name = self.name.trim();
        let email = self.email.trim();
        let role = self.role.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() || role.is_empty() {
            return Err(ClientError::input(messages::FILL_REQUIRED_FIELDS));
        }

        let role = Role::from(role.to_string());
        let cuisine_type = if role.requires_cuisine_type() {
            match self.cuisine_type.as_deref().map(str::trim) {
                Some(cuisine) if !cuisine.is_empty() => cuisine.to_string(),
                _ => return Err(ClientError::input(messages::CHOOSE_CUISINE)),
            }
        } else {
            String::new()
        };

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password,
            role,
            cuisine_type,
        })
    }
}

/// Result of checking the session against the role a page needs
#[derive(Debug, Clone, PartialEq)]
pub enum AuthCheck {
    Allowed(SessionInfo),
    /// Leave the page
    Redirect {
        to: &'static str,
        message: Option<&'static str>,
    },
    /// Wrong role with no page of its own to go to
    Denied(SessionInfo),
}

impl<H: HttpClient> FoodClient<H> {
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginOutcome> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ClientError::input(messages::FILL_ALL_FIELDS));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.http.post("/api/login", &request).await?;

        if let Role::Other(raw) = &response.role {
            tracing::warn!(role = %raw, "Unknown role, staying on the start page");
        }
        tracing::info!(role = %response.role, "Logged in");

        Ok(LoginOutcome {
            redirect: response.role.landing_page(),
            message: response.message,
            role: response.role,
        })
    }

    pub async fn register(&self, form: Registration) -> ClientResult<NextStep> {
        let request = form.into_request()?;
        let response: Option<MessageResponse> = self.http.post("/api/register", &request).await?;
        tracing::info!(role = %request.role, "Registered");

        let message = response
            .map(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| messages::REGISTER_SUCCESS.to_string());
        Ok(NextStep::new(message, routes::LOGIN))
    }

    /// Log out and drop the local session.
    ///
    /// The backend may answer with a non-JSON body; that is not a failure.
    pub async fn logout(&self) -> ClientResult<NextStep> {
        let message = match self.http.post_empty::<Option<MessageResponse>>("/api/logout").await {
            Ok(response) => response.map(|r| r.message).unwrap_or_default(),
            Err(ClientError::InvalidResponse(e)) => {
                tracing::warn!(error = %e, "Logout response is not JSON");
                String::new()
            }
            Err(e) => return Err(e),
        };

        self.forget_session()?;
        Ok(NextStep::new(message, routes::LOGIN))
    }

    pub async fn session(&self) -> ClientResult<SessionInfo> {
        self.http.get("/api/session").await
    }

    /// Check the session before opening a page that needs `required` (any
    /// logged-in user when `None`).
    pub async fn check_auth(&self, required: Option<&Role>) -> AuthCheck {
        let session = match self.session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(error = %e, "Failed to check auth");
                return AuthCheck::Redirect {
                    to: routes::LOGIN,
                    message: Some(Action::CheckSession.fallback()),
                };
            }
        };

        if !session.is_logged_in() {
            return AuthCheck::Redirect {
                to: routes::LOGIN,
                message: None,
            };
        }

        let Some(required) = required else {
            return AuthCheck::Allowed(session);
        };
        if session.has_role(required) {
            return AuthCheck::Allowed(session);
        }

        match session.role.as_ref().and_then(Role::home_page) {
            Some(page) => AuthCheck::Redirect {
                to: page,
                message: None,
            },
            None => AuthCheck::Denied(session),
        }
    }
}
