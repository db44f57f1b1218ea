use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Error,
}

impl Role {
    /// Decode a server-side role string. Unknown roles map to [`Role::Error`]
    /// so one bad row never fails a whole history fetch.
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            other => {
                tracing::warn!(role = other, "unknown role in chat history, treating as error");
                Self::Error
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }
}

/// One entry in the visible conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ConversationTurn {
    #[must_use]
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), at: Utc::now() }
    }
}

/// Setup state captured after a successful configure call.
///
/// Absence of a value means the session is unconfigured; the client never
/// persists this across restarts (the backend owns the collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSetup {
    pub identifier: String,
    pub collection: String,
    /// Human-readable status message returned by the backend.
    pub message: String,
}

/// Which backend endpoint a question is routed to.
///
/// `AgentSearch` is the "agent mode" bypass: it requires no prior setup and
/// targets the agent endpoint instead of the configured collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRoute {
    Collection,
    AgentSearch,
}

impl QueryRoute {
    /// Whether this route may be used without an established session.
    #[must_use]
    pub const fn bypasses_setup(self) -> bool {
        matches!(self, Self::AgentSearch)
    }
}

/// Lifecycle of a conversation session.
///
/// `Configuring` and `Querying` are transient busy states; a session in one
/// of them rejects new submissions instead of queueing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unconfigured,
    Configuring,
    Ready,
    Querying,
}

impl SessionPhase {
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Configuring | Self::Querying)
    }
}
