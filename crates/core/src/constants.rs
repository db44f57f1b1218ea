//! Shared constants for clarify.
//!
//! Centralizes endpoint paths and shape limits used across crates.

/// Exact length of a Google Sheets spreadsheet id.
pub const SHEET_ID_LEN: usize = 44;

/// Minimum accepted length for a shape-checked API key.
pub const MIN_API_KEY_LEN: usize = 24;

/// Prefix every shape-checked API key must carry.
pub const API_KEY_PREFIX: &str = "sk-";

/// Default per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default backend base URL when `CLARIFY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Keystore entry name under which the API key is cached.
pub const KEYSTORE_API_KEY: &str = "api_key";

/// Docs backend endpoint paths.
pub const SETUP_PATH: &str = "/setup/";
pub const QUERY_PATH: &str = "/query/";
pub const AGENT_SEARCH_PATH: &str = "/agent-search/";
pub const CLEAR_CHAT_PATH: &str = "/clear-chat/";
pub const CHAT_HISTORY_PATH: &str = "/chat-history/";
pub const SHEETS_QUERY_PATH: &str = "/sheets_query/";

/// Cookie-session portal endpoint paths.
pub const PORTAL_CHECK_SESSION_PATH: &str = "/api/check-session";
pub const PORTAL_LOGIN_PATH: &str = "/api/login";
pub const PORTAL_LOGOUT_PATH: &str = "/api/logout";
pub const PORTAL_PROCESS_PATH: &str = "/api/process";

/// Public-feed probe host (overridable for tests via `CLARIFY_SHEETS_FEED_URL`).
pub const SHEETS_FEED_URL: &str = "https://spreadsheets.google.com";

/// Sheets API probe host (overridable for tests via `CLARIFY_SHEETS_API_URL`).
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com";
