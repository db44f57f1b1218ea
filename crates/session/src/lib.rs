//! Conversation sessions for clarify
//!
//! Centralizes the setup → query → response loop shared by every front-end
//! variant: a session owns its turn log and setup state exclusively, moves
//! through `Unconfigured → Configuring → Ready → Querying → Ready`, and
//! rejects submissions while a call is in flight (single-flight, no queue).
//!
//! Remote failures never poison a session: they are appended to the turn log
//! as [`clarify_core::Role::Error`] turns and the session can always be
//! re-queried or reconfigured afterwards.

mod docs;
mod log;
mod sheet;


pub use docs::DocsSession;
pub use log::TurnLog;
pub use sheet::SheetSession;
