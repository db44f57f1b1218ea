//! Cookie-session variant of the backend (`/api/*` endpoints).
//!
//! Unlike [`crate::DocsClient`], authentication lives in a server-set
//! session cookie rather than a client-held key; the underlying HTTP client
//! carries a cookie store so `login` makes subsequent `process` calls work.

use clarify_core::constants::{
    DEFAULT_API_URL, PORTAL_CHECK_SESSION_PATH, PORTAL_LOGIN_PATH, PORTAL_LOGOUT_PATH,
    PORTAL_PROCESS_PATH, REQUEST_TIMEOUT_SECS,
};
use clarify_core::env_config::{env_parse_with_default, env_string_with_default};
use clarify_core::{validate_question, ClarifyError, Result};

use crate::wire;

/// Client for the cookie-authenticated portal endpoints.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Creates a client with an in-memory cookie store.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self> {
        let timeout = env_parse_with_default("CLARIFY_HTTP_TIMEOUT_SECS", REQUEST_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout))
            .cookie_store(true)
            .build()
            .map_err(|e| ClarifyError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: wire::normalize_base_url(base_url) })
    }

    /// Creates a client from `CLARIFY_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(&env_string_with_default("CLARIFY_API_URL", DEFAULT_API_URL))
    }

    /// Whether the server still considers this client's cookie session live.
    pub async fn check_session(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}{PORTAL_CHECK_SESSION_PATH}", self.base_url))
            .send()
            .await?;
        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let check: wire::SessionCheckResponse =
                    wire::decode("session check response", &body)?;
                Ok(check.authenticated)
            },
            Err(detail) => Err(ClarifyError::Setup { detail }),
        }
    }

    /// Authenticate; the session cookie is retained by this client.
    pub async fn login(&self, password: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}{PORTAL_LOGIN_PATH}", self.base_url))
            .json(&wire::LoginRequest { password })
            .send()
            .await?;
        match wire::body_or_detail(response).await? {
            Ok(_) => {
                tracing::info!("portal session established");
                Ok(())
            },
            Err(detail) => Err(ClarifyError::Setup { detail }),
        }
    }

    /// Drop the server-side session.
    pub async fn logout(&self) -> Result<()> {
        let response =
            self.client.post(format!("{}{PORTAL_LOGOUT_PATH}", self.base_url)).send().await?;
        match wire::body_or_detail(response).await? {
            Ok(_) => Ok(()),
            Err(detail) => Err(ClarifyError::Setup { detail }),
        }
    }

    /// Ask a question through the portal. Requires a live cookie session;
    /// a 401 maps to [`ClarifyError::NotReady`].
    pub async fn process(&self, question: &str) -> Result<String> {
        validate_question(question)?;

        let response = self
            .client
            .post(format!("{}{PORTAL_PROCESS_PATH}", self.base_url))
            .json(&wire::QueryRequest { query: question })
            .send()
            .await?;

        if response.status().as_u16() == 401 {
            return Err(ClarifyError::NotReady);
        }
        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let answer: wire::AnswerResponse = wire::decode("process response", &body)?;
                Ok(answer.response)
            },
            Err(detail) => Err(ClarifyError::Query { detail }),
        }
    }
}
