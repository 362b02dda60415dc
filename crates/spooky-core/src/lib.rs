//! # spooky-core
//!
//! Shared library for the Spooky Text Bot containing the combining-mark glyph
//! tables, the per-user configuration model, the command interpreter, and the
//! text transformation engine.
//!
//! This crate is pure domain logic: it has zero dependencies on sockets, file
//! systems, async runtimes, or any chat platform. The bot application crate
//! (`spooky-bot`) layers transport and persistence on top of it.
//!
//! # What the bot does (for beginners)
//!
//! "Spooky" (often called *zalgo*) text abuses Unicode combining marks:
//! characters that render stacked onto the previous character instead of
//! occupying their own cell. By appending a handful of random combining marks
//! after every letter, ordinary text turns into a glitchy, haunted-looking
//! mess that is still copy-pastable as plain Unicode.
//!
//! The crate splits into three concerns:
//!
//! - **`domain`** – Plain data: the three glyph tables ([`SpookyLevel`]), the
//!   intensity presets ([`Effectiveness`]), and the per-user preference value
//!   object ([`UserConfig`]).
//!
//! - **`command`** – Maps chat command text (`/add_up_symbols`, ...) onto
//!   copy-on-write [`UserConfig`] transitions.
//!
//! - **`transform`** – The engine itself: [`apply_spooky`] injects marks into
//!   text according to a config, drawing randomness from an injectable
//!   [`RandomSource`] so tests stay deterministic.

pub mod command;
pub mod domain;
pub mod transform;

// Re-export the most-used types at the crate root so callers can write
// `spooky_core::UserConfig` instead of `spooky_core::domain::config::UserConfig`.
pub use command::Command;
pub use domain::config::{Effectiveness, UserConfig};
pub use domain::glyph::{is_spooky_mark, SpookyLevel};
pub use transform::engine::{apply_spooky, strip_spooky};
pub use transform::random::{RandomSource, ThreadRandom};
