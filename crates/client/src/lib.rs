//! HTTP clients for the clarify backend.
//!
//! Three clients, one per backend surface:
//!
//! - [`DocsClient`] — documentation Q&A (setup, query, agent search, server
//!   chat history).
//! - [`SheetsClient`] — spreadsheet Q&A with accessibility probes and a
//!   normalization boundary over the backend's unstable response shape.
//! - [`PortalClient`] — the cookie-session variant (`/api/*` endpoints).
//!
//! All clients validate input locally before issuing a request and convert
//! every failure into a [`clarify_core::ClarifyError`]; nothing is retried.

mod docs;
mod portal;
mod sheets;
pub(crate) mod wire;

#[cfg(test)]
mod portal_tests;
#[cfg(test)]
mod sheets_tests;

pub use docs::DocsClient;
pub use portal::PortalClient;
pub use sheets::SheetsClient;
