use clarify_client::SheetsClient;
use clarify_core::{
    validate_api_key, validate_question, validate_sheet_id, ClarifyError, ConversationTurn,
    Result, SessionPhase,
};
use uuid::Uuid;

use crate::log::TurnLog;

/// A spreadsheet Q&A session.
///
/// Setup here is local validation plus an accessibility probe rather than a
/// server-side ingest: the sheet id must be well-formed and the sheet must
/// be reachable (publicly, or through the API probe with the credential)
/// before the first query goes out.
pub struct SheetSession {
    id: Uuid,
    client: SheetsClient,
    sheet_id: Option<String>,
    api_key: Option<String>,
    phase: SessionPhase,
    log: TurnLog,
}

impl std::fmt::Debug for SheetSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSession")
            .field("id", &self.id)
            .field("sheet_id", &self.sheet_id)
            .field("phase", &self.phase)
            .field("turns", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl SheetSession {
    #[must_use]
    pub fn new(client: SheetsClient) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            sheet_id: None,
            api_key: None,
            phase: SessionPhase::Unconfigured,
            log: TurnLog::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_established(&self) -> bool {
        self.sheet_id.is_some()
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        self.log.as_slice()
    }

    /// Validate the sheet id and credential shapes, then probe the sheet.
    ///
    /// The public feed probe runs first; when it fails the API probe with
    /// the bearer credential is the fallback. Either succeeding establishes
    /// the session. Malformed ids and keys are rejected before any request.
    pub async fn configure(&mut self, sheet_id: &str, api_key: &str) -> Result<()> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        validate_sheet_id(sheet_id)?;
        validate_api_key(api_key)?;

        self.phase = SessionPhase::Configuring;
        let probed = match self.client.check_public_access(sheet_id).await {
            Ok(()) => Ok(()),
            Err(ClarifyError::Access(_)) => self.client.check_api_access(sheet_id, api_key).await,
            Err(e) => Err(e),
        };

        match probed {
            Ok(()) => {
                tracing::info!(session = %self.id, "sheet accessible, session established");
                self.sheet_id = Some(sheet_id.to_owned());
                self.api_key = Some(api_key.to_owned());
                self.phase = SessionPhase::Ready;
                Ok(())
            },
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "sheet access check failed");
                self.sheet_id = None;
                self.api_key = None;
                self.phase = SessionPhase::Unconfigured;
                Err(e)
            },
        }
    }

    /// Ask a question about the configured sheet.
    ///
    /// Same turn-log discipline as the docs session: success appends a
    /// (user, assistant) pair, remote failure appends one error turn, and a
    /// question before [`SheetSession::configure`] is `NotReady` with the
    /// log untouched.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        if self.phase.is_busy() {
            return Err(ClarifyError::Busy);
        }
        validate_question(question)?;
        let (Some(sheet_id), Some(api_key)) = (self.sheet_id.clone(), self.api_key.clone())
        else {
            return Err(ClarifyError::NotReady);
        };

        self.phase = SessionPhase::Querying;
        let outcome = self.client.sheets_query(&sheet_id, question, &api_key).await;
        self.phase = SessionPhase::Ready;

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

    /// Unconditionally clear the turn log and setup state.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.id, "session reset");
        self.log.clear();
        self.sheet_id = None;
        self.api_key = None;
        self.phase = SessionPhase::Unconfigured;
    }
}
