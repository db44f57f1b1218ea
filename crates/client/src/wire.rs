//! Request/response DTOs and the response normalization boundary.

use clarify_core::{ClarifyError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct SetupRequest<'a> {
    pub url: &'a str,
    pub collection_name: &'a str,
}

#[derive(Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Serialize)]
pub(crate) struct SheetsQueryRequest<'a> {
    pub sheet_id: &'a str,
    pub query: &'a str,
    pub api_key: &'a str,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub password: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
pub(crate) struct AnswerResponse {
    pub response: String,
}

#[derive(Deserialize)]
pub(crate) struct ChatHistoryResponse {
    pub chat_history: Vec<(String, String)>,
}

#[derive(Deserialize)]
pub(crate) struct SessionCheckResponse {
    pub authenticated: bool,
}

/// The sheets endpoint answers either `{"response": "text"}` or
/// `{"response": {"response": "text"}}` depending on the backend build.
/// Both decode here and flatten to the inner string; callers never see the
/// ambiguity.
#[derive(Deserialize)]
pub(crate) struct SheetsAnswerResponse {
    pub response: SheetsAnswer,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SheetsAnswer {
    Text(String),
    Wrapped { response: String },
}

impl SheetsAnswer {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Wrapped { response: text } => text,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Pull the backend's `detail` field out of an error body, falling back to
/// the raw body text when it is not the expected JSON shape.
pub(crate) fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.detail,
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "server returned an error with no detail".to_owned()
            } else {
                truncate(trimmed, 500).to_owned()
            }
        },
    }
}

/// Split a response into its success body or the extracted error detail.
///
/// The outer error is transport-level only; a non-success status is the
/// inner `Err` so each call site can wrap it in its own taxonomy variant.
pub(crate) async fn body_or_detail(
    response: reqwest::Response,
) -> Result<std::result::Result<String, String>> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(Ok(body))
    } else {
        tracing::debug!(status = status.as_u16(), "backend returned error status");
        Ok(Err(extract_detail(&body)))
    }
}

/// Decode a success body, carrying a truncated copy of it in the error for
/// diagnostics.
pub(crate) fn decode<T: DeserializeOwned>(context: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ClarifyError::Json {
        context: format!("{context} (body: {})", truncate(body, 200)),
        source: e,
    })
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}

/// Build the shared HTTP client with the configured request timeout.
pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ClarifyError::ClientInit(e.to_string()))
}

/// Trim the trailing slash so endpoint paths can be appended verbatim.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_owned()
}
