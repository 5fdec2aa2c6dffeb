//! `FoodClient`: entry point of the API layer
//!
//! One `impl` block per screen of the web front-end lives under
//! [`crate::api`]; this module only owns the transport and the session
//! storage they share.

use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::SessionStorage;
use crate::{ClientConfig, ClientResult};

/// Typed client of the food-ordering backend
///
/// Generic over the transport so flows can be driven by an in-memory
/// [`HttpClient`] in tests.
///
/// ```no_run
/// use food_client::{ClientConfig, FoodClient};
///
/// # async fn example() -> Result<(), food_client::ClientError> {
/// let client = FoodClient::new(&ClientConfig::from_env())?;
/// let outcome = client.login("anna@example.com", "secret").await?;
/// println!("→ {}", outcome.redirect);
/// client.persist_session()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FoodClient<H: HttpClient = NetworkHttpClient> {
    pub(crate) http: H,
    storage: Option<SessionStorage>,
}

impl FoodClient<NetworkHttpClient> {
    /// Network client, resuming the stored session if the configuration has
    /// a session directory.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let storage = config.session_dir.as_ref().map(SessionStorage::new);
        let session = storage
            .as_ref()
            .and_then(|s| s.load_for(config.normalized_base_url()));
        if session.is_some() {
            tracing::debug!("Resuming stored session");
        }

        let http = NetworkHttpClient::with_session(config, session)?;
        Ok(Self { http, storage })
    }
}

impl<H: HttpClient> FoodClient<H> {
    pub fn with_http(http: H) -> Self {
        Self { http, storage: None }
    }

    pub fn with_storage(mut self, storage: SessionStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn storage(&self) -> Option<&SessionStorage> {
        self.storage.as_ref()
    }

    /// Write the session to storage if it changed. Returns whether anything
    /// was written.
    pub fn persist_session(&self) -> ClientResult<bool> {
        let Some(storage) = &self.storage else {
            return Ok(false);
        };
        if !self.http.session_changed() {
            return Ok(false);
        }

        match self.http.session_state() {
            Some(state) if !state.is_empty() => storage.save(&state)?,
            _ => storage.delete()?,
        }
        tracing::debug!(path = %storage.path().display(), "Session saved");
        Ok(true)
    }

    /// Drop the session in memory and on disk
    pub fn forget_session(&self) -> ClientResult<()> {
        self.http.clear_session();
        if let Some(storage) = &self.storage {
            storage.delete()?;
        }
        Ok(())
    }
}
