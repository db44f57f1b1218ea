//! Typed error enum shared by every clarify crate.

use thiserror::Error;

/// Errors from clarify client operations.
///
/// Every remote failure is representable here so call sites can convert it
/// into a displayable string; nothing in this taxonomy is fatal and nothing
/// is retried automatically.
#[derive(Debug, Error)]
pub enum ClarifyError {
    /// Malformed local input, rejected before any network call.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Remote setup call failed or returned a non-success status.
    #[error("setup failed: {detail}")]
    Setup { detail: String },

    /// Target document or sheet is unreachable or not public.
    #[error("access check failed: {0}")]
    Access(String),

    /// Remote query call failed or returned a non-success status.
    #[error("query failed: {detail}")]
    Query { detail: String },

    /// Query attempted before a successful setup with no bypass active.
    #[error("session not established: configure before asking")]
    NotReady,

    /// A call arrived while a previous one is still in flight.
    #[error("a request is already in flight for this session")]
    Busy,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("keystore error: {0}")]
    Keystore(String),

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClarifyError {
    /// Whether this error was raised locally, without any network traffic.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotReady | Self::Busy)
    }

    /// The message a UI layer should display for this error.
    ///
    /// Server-provided detail strings pass through verbatim; transport
    /// failures collapse to a generic network message.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Setup { detail } | Self::Query { detail } => detail.clone(),
            Self::Http(_) => "network error, please try again".to_owned(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClarifyError>;
