use clarify_client::DocsClient;
use clarify_core::{
    validate_non_empty, validate_question, ClarifyError, ConversationTurn, QueryRoute, Result,
    SessionPhase, SessionSetup,
};
use uuid::Uuid;

use crate::log::TurnLog;

/// A documentation Q&A session.
///
/// Owns its turn log and setup state exclusively; nothing here is shared
/// across sessions. Queries routed to the collection require a successful
/// [`DocsSession::configure`] first; the agent-search route bypasses that.
pub struct DocsSession {
    id: Uuid,
    client: DocsClient,
    route: QueryRoute,
    phase: SessionPhase,
    setup: Option<SessionSetup>,
    log: TurnLog,
}

impl std::fmt::Debug for DocsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsSession")
            .field("id", &self.id)
            .field("route", &self.route)
            .field("phase", &self.phase)
            .field("turns", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl DocsSession {
    #[must_use]
    pub fn new(client: DocsClient) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            route: QueryRoute::Collection,
            phase: SessionPhase::Unconfigured,
            setup: None,
            log: TurnLog::new(),
        }
    }

    /// Switch the question route ("agent mode" toggle).
    #[must_use]
    pub fn with_route(mut self, route: QueryRoute) -> Self {
        self.route = route;
        self
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn route(&self) -> QueryRoute {
        self.route
    }

    #[must_use]
    pub fn is_established(&self) -> bool {
        self.setup.is_some()
    }

    #[must_use]
    pub fn setup(&self) -> Option<&SessionSetup> {
        self.setup.as_ref()
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        self.log.as_slice()
    }

    #[must_use]
    pub fn client(&self) -> &DocsClient {
        &self.client
    }

    /// Ingest a document and mark the session established.
    ///
    /// On failure the session drops back to `Unconfigured`, even if it had
    /// been established before; the returned error carries the
    /// server-provided detail (or a generic transport message).
    pub async fn configure(&mut self, identifier: &str, collection: &str) -> Result<String> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        validate_non_empty("document link", identifier)?;
        validate_non_empty("collection name", collection)?;

        self.phase = SessionPhase::Configuring;
        match self.client.setup(identifier, collection).await {
            Ok(message) => {
                tracing::info!(session = %self.id, collection, "session established");
                self.setup = Some(SessionSetup {
                    identifier: identifier.to_owned(),
                    collection: collection.to_owned(),
                    message: message.clone(),
                });
                self.phase = SessionPhase::Ready;
                Ok(message)
            },
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "setup failed");
                self.setup = None;
                self.phase = SessionPhase::Unconfigured;
                Err(e)
            },
        }
    }

    /// Ask a question and record the outcome in the turn log.
    ///
    /// Fails fast with `NotReady` (log untouched) when the session is not
    /// established and the route does not bypass setup. On success appends a
    /// (user, assistant) pair; on remote failure appends exactly one error
    /// turn and returns the error.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        validate_question(question)?;
        if !self.route.bypasses_setup() && self.setup.is_none() {
            return Err(ClarifyError::NotReady);
        }

        self.phase = SessionPhase::Querying;
        let outcome = self.client.ask(self.route, question).await;
        self.phase = self.settled_phase();

        match outcome {
            Ok(answer) => {
                self.log.append_exchange(question, &answer);
                Ok(answer)
            },
            Err(e) => {
                self.log.append_error(&e.display_message());
                Err(e)
            },
        }
    }

    /// Replace the local log with the server-side chat history.
    ///
    /// Returns the number of turns fetched.
    pub async fn sync_history(&mut self) -> Result<usize> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        let turns = self.client.chat_history().await?;
        let count = turns.len();
        self.log.replace(turns);
        Ok(count)
    }

    /// Clear the server-side history, then the local state.
    pub async fn clear(&mut self) -> Result<()> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        self.client.clear_chat().await?;
        self.reset();
        Ok(())
    }

    /// Unconditionally clear the turn log and setup state.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.id, "session reset");
        self.log.clear();
        self.setup = None;
        self.phase = SessionPhase::Unconfigured;
    }

    fn settled_phase(&self) -> SessionPhase {
        if self.setup.is_some() { SessionPhase::Ready } else { SessionPhase::Unconfigured }
    }
}
