//! spooky-bot library crate.
//!
//! This crate wraps the pure transformation core (`spooky-core`) in a
//! Telegram bot: long-polled updates come in, spookified inline answers and
//! config confirmation replies go out, and per-user preferences survive
//! restarts through a periodically snapshotted JSON file.
//!
//! # Architecture
//!
//! ```text
//! Telegram Bot API (JSON over HTTPS)
//!         ↕
//! [spooky-bot]
//!   ├── domain/           InboundEvent/OutboundAction, credentials + settings
//!   ├── application/      Update handling use case, dispatcher, transport trait
//!   └── infrastructure/
//!         ├── storage/    ConfigStore + periodic snapshot task
//!         └── telegram/   Bot API wire types and reqwest client
//!         ↕
//! spooky-core  (glyph tables, config model, commands, engine)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain`, `spooky-core`, and the store handle;
//!   it talks to the network only through the [`application::BotTransport`]
//!   trait.
//! - `infrastructure` implements that trait with `reqwest` and owns the
//!   snapshot file.

/// Domain layer: event boundary types and runtime settings.
pub mod domain;

/// Application layer: the update-handling use case and dispatcher loop.
pub mod application;

/// Infrastructure layer: config persistence and the Telegram Bot API client.
pub mod infrastructure;
