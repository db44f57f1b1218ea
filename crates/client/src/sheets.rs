//! Client for the spreadsheet Q&A surface of the backend.
//!
//! Sheet ids are shape-checked locally and the target sheet is probed for
//! accessibility before any query; a sheet that is neither public nor
//! readable with the supplied credential never reaches the query endpoint.

use clarify_core::constants::{
    DEFAULT_API_URL, REQUEST_TIMEOUT_SECS, SHEETS_API_URL, SHEETS_FEED_URL, SHEETS_QUERY_PATH,
};
use clarify_core::env_config::{env_parse_with_default, env_string_with_default};
use clarify_core::{
    validate_api_key, validate_question, validate_sheet_id, ClarifyError, Result,
};

use crate::wire;

/// Client for sheet accessibility probes and `sheets_query` calls.
#[derive(Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    feed_url: String,
    api_url: String,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.base_url)
            .field("feed_url", &self.feed_url)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    /// Creates a client against the given backend base URL, with the Google
    /// probe hosts at their production defaults.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self> {
        let timeout = env_parse_with_default("CLARIFY_HTTP_TIMEOUT_SECS", REQUEST_TIMEOUT_SECS);
        Ok(Self {
            client: wire::build_http_client(timeout)?,
            base_url: wire::normalize_base_url(base_url),
            feed_url: SHEETS_FEED_URL.to_owned(),
            api_url: SHEETS_API_URL.to_owned(),
        })
    }

    /// Creates a client from `CLARIFY_API_URL`; probe hosts can be redirected
    /// with `CLARIFY_SHEETS_FEED_URL` / `CLARIFY_SHEETS_API_URL`.
    pub fn from_env() -> Result<Self> {
        let mut client = Self::new(&env_string_with_default("CLARIFY_API_URL", DEFAULT_API_URL))?;
        client.feed_url = wire::normalize_base_url(&env_string_with_default(
            "CLARIFY_SHEETS_FEED_URL",
            SHEETS_FEED_URL,
        ));
        client.api_url = wire::normalize_base_url(&env_string_with_default(
            "CLARIFY_SHEETS_API_URL",
            SHEETS_API_URL,
        ));
        Ok(client)
    }

    /// Redirect both probe hosts, for tests against a mock server.
    #[must_use]
    pub fn with_probe_hosts(mut self, feed_url: &str, api_url: &str) -> Self {
        self.feed_url = wire::normalize_base_url(feed_url);
        self.api_url = wire::normalize_base_url(api_url);
        self
    }

    /// Check whether a sheet is published publicly.
    ///
    /// # Errors
    /// `Validation` for a malformed id (no request issued), `Access` when the
    /// probe returns anything but HTTP 200 or the host is unreachable.
    pub async fn check_public_access(&self, sheet_id: &str) -> Result<()> {
        validate_sheet_id(sheet_id)?;

        let url =
            format!("{}/feeds/worksheets/{sheet_id}/public/basic?alt=json", self.feed_url);
        let response = self.client.get(url).send().await.map_err(|e| {
            ClarifyError::Access(format!("sheet accessibility probe failed: {e}"))
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClarifyError::Access(
                "unable to access the sheet, make sure it is public".to_owned(),
            ))
        }
    }

    /// Check sheet readability through the Sheets API with a bearer
    /// credential, the alternate probe for non-public sheets.
    pub async fn check_api_access(&self, sheet_id: &str, api_key: &str) -> Result<()> {
        validate_sheet_id(sheet_id)?;
        validate_api_key(api_key)?;

        let url = format!("{}/v4/spreadsheets/{sheet_id}", self.api_url);
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {api_key}"))
            .send()
            .await
            .map_err(|e| ClarifyError::Access(format!("sheet api probe failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClarifyError::Access(format!(
                "sheet not readable with the supplied credential (status {})",
                response.status().as_u16()
            )))
        }
    }

    /// Ask a question about a sheet.
    ///
    /// The backend's answer shape is unstable (plain string or a nested
    /// object); both forms normalize to the inner string before returning.
    ///
    /// # Errors
    /// `Validation` for malformed id/key/question (no request issued),
    /// `Query` with the server detail on a non-success status.
    pub async fn sheets_query(
        &self,
        sheet_id: &str,
        question: &str,
        api_key: &str,
    ) -> Result<String> {
        validate_sheet_id(sheet_id)?;
        validate_api_key(api_key)?;
        validate_question(question)?;

        let response = self
            .client
            .post(format!("{}{SHEETS_QUERY_PATH}", self.base_url))
            .json(&wire::SheetsQueryRequest { sheet_id, query: question, api_key })
            .send()
            .await?;

        match wire::body_or_detail(response).await? {
            Ok(body) => {
                let answer: wire::SheetsAnswerResponse =
                    wire::decode("sheets query response", &body)?;
                Ok(answer.response.into_text())
            },
            Err(detail) => Err(ClarifyError::Query { detail }),
        }
    }
}
