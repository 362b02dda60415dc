//! Domain entities for the Spooky Text Bot.
//!
//! Pure data with no infrastructure dependencies: the glyph tables and the
//! per-user configuration value object. Everything in here is cheap to clone,
//! structurally comparable, and serializable with serde.

pub mod config;
pub mod glyph;
