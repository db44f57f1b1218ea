//! Client for the documentation Q&A surface of the backend.

use clarify_core::constants::{
    AGENT_SEARCH_PATH, CHAT_HISTORY_PATH, CLEAR_CHAT_PATH, DEFAULT_API_URL, QUERY_PATH,
    REQUEST_TIMEOUT_SECS, SETUP_PATH,
};
use clarify_core::env_config::{env_parse_with_default, env_string_with_default};
use clarify_core::{
    validate_non_empty, validate_question, ClarifyError, ConversationTurn, QueryRoute, Result,
    Role,
};

use crate::wire;

/// Client for document ingestion and collection-scoped queries.
#[derive(Debug, Clone)]
pub struct DocsClient {
    client: reqwest::Client,
    base_url: String,
}

impl DocsClient {
    /// Creates a client against the given base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self> {
        let timeout = env_parse_with_default("CLARIFY_HTTP_TIMEOUT_SECS", REQUEST_TIMEOUT_SECS);
        Ok(Self {
            client: wire::build_http_client(timeout)?,
            base_url: wire::normalize_base_url(base_url),
        })
    }

    /// Creates a client from `CLARIFY_API_URL`, defaulting to the local
    /// backend address.
    pub fn from_env() -> Result<Self> {
        Self::new(&env_string_with_default("CLARIFY_API_URL", DEFAULT_API_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ingest a document into a named collection.
    ///
    /// Returns the backend's human-readable status message.
    ///
    /// # Errors
    /// `Validation` for empty inputs (no request issued), `Setup` with the
    /// server-provided detail on a non-success status, `Http` on transport
    /// failure.
    pub async fn setup(&self, url: &str, collection_name: &str) -> Result<String> {
        validate_non_empty("document link", url)?;
        validate_non_empty("collection name", collection_name)?;

        let response = self
            .client
            .post(format!("{}{SETUP_PATH}", self.base_url))
            .json(&wire::SetupRequest { url, collection_name })
            .send()
            .await?;

        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let ack: wire::MessageResponse = wire::decode("setup response", &body)?;
                tracing::info!(collection = collection_name, "document ingested");
                Ok(ack.message)
            },
            Err(detail) => Err(ClarifyError::Setup { detail }),
        }
    }

    /// Ask a question against the configured collection.
    pub async fn query(&self, question: &str) -> Result<String> {
        self.post_question(QUERY_PATH, question).await
    }

    /// Ask a question through the agent-search endpoint (no setup required).
    pub async fn agent_search(&self, question: &str) -> Result<String> {
        self.post_question(AGENT_SEARCH_PATH, question).await
    }

    /// Route a question to the endpoint selected by `route`.
    pub async fn ask(&self, route: QueryRoute, question: &str) -> Result<String> {
        match route {
            QueryRoute::Collection => self.query(question).await,
            QueryRoute::AgentSearch => self.agent_search(question).await,
        }
    }

    /// Clear the server-side chat history.
    pub async fn clear_chat(&self) -> Result<()> {
        let response =
            self.client.post(format!("{}{CLEAR_CHAT_PATH}", self.base_url)).send().await?;
        match wire::body_or_detail(response).await? {
            Ok(_) => Ok(()),
            Err(detail) => Err(ClarifyError::Query { detail }),
        }
    }

    /// Fetch the server-side chat history as conversation turns.
    ///
    /// Rows with unknown role strings become [`Role::Error`] turns rather
    /// than failing the fetch.
    pub async fn chat_history(&self) -> Result<Vec<ConversationTurn>> {
        let response =
            self.client.get(format!("{}{CHAT_HISTORY_PATH}", self.base_url)).send().await?;
        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let history: wire::ChatHistoryResponse =
                    wire::decode("chat history response", &body)?;
                Ok(history
                    .chat_history
                    .into_iter()
                    .map(|(role, content)| ConversationTurn::now(Role::from_wire(&role), content))
                    .collect())
            },
            Err(detail) => Err(ClarifyError::Query { detail }),
        }
    }

    async fn post_question(&self, path: &str, question: &str) -> Result<String> {
        validate_question(question)?;

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(&wire::QueryRequest { query: question })
            .send()
            .await?;

        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let answer: wire::AnswerResponse = wire::decode("query response", &body)?;
                Ok(answer.response)
            },
            Err(detail) => Err(ClarifyError::Query { detail }),
        }
    }
}
