//! Application layer for spooky-bot.
//!
//! Orchestrates the core against the store and the transport:
//!
//! - [`handle_update::HandleUpdateUseCase`] decides what (if anything) to do
//!   with one inbound event.
//! - [`dispatch`] owns the polling loop and the [`BotTransport`] trait the
//!   infrastructure implements.
//!
//! No sockets, no files: the only I/O reachable from here goes through the
//! transport trait and the store handle, which is what keeps this layer fully
//! testable with recording doubles.

pub mod dispatch;
pub mod handle_update;

pub use dispatch::{run_dispatcher, BotTransport};
pub use handle_update::{HandleUpdateUseCase, PLACEHOLDER_QUERY_TEXT};
