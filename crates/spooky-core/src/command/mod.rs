//! Chat command interpretation.
//!
//! Commands arrive as raw message text. Matching is a case-sensitive
//! "starts with" test against an ordered prefix table — the first matching
//! prefix wins and exactly one command is honored per message. The match is
//! deliberately loose: `/add_up_symbols_whatever` still triggers
//! `/add_up_symbols`, mirroring the behaviour users already rely on.
//!
//! Anything that matches no prefix is not an error; it is simply not a
//! command, and the caller produces no reply.

use crate::domain::config::{Effectiveness, UserConfig};
use crate::domain::glyph::SpookyLevel;

/// A recognized configuration command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    UseMaxEffectiveness,
    UseNormalEffectiveness,
    UseMinEffectiveness,
    AddLevel(SpookyLevel),
    RemoveLevel(SpookyLevel),
    KeepSpookySymbols,
    ClearSpookySymbols,
}

/// Prefix table in match-priority order. First match wins.
const COMMANDS: [(&str, Command); 11] = [
    ("/use_max_spooky_effectiveness", Command::UseMaxEffectiveness),
    ("/use_normal_spooky_effectiveness", Command::UseNormalEffectiveness),
    ("/use_min_spooky_effectiveness", Command::UseMinEffectiveness),
    ("/add_up_symbols", Command::AddLevel(SpookyLevel::Up)),
    ("/add_down_symbols", Command::AddLevel(SpookyLevel::Down)),
    ("/add_mid_symbols", Command::AddLevel(SpookyLevel::Mid)),
    ("/remove_up_symbols", Command::RemoveLevel(SpookyLevel::Up)),
    ("/remove_down_symbols", Command::RemoveLevel(SpookyLevel::Down)),
    ("/remove_mid_symbols", Command::RemoveLevel(SpookyLevel::Mid)),
    ("/keep_spooky_symbols", Command::KeepSpookySymbols),
    ("/clear_spooky_symbols", Command::ClearSpookySymbols),
];

impl Command {
    /// Resolves message text to a command, or `None` for a no-op.
    pub fn parse(text: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map(|(_, command)| *command)
    }

    /// Applies this command to `current`, producing the next config value.
    pub fn apply(self, current: &UserConfig) -> UserConfig {
        match self {
            Command::UseMaxEffectiveness => current.with_effectiveness(Effectiveness::Max),
            Command::UseNormalEffectiveness => current.with_effectiveness(Effectiveness::Normal),
            Command::UseMinEffectiveness => current.with_effectiveness(Effectiveness::Min),
            Command::AddLevel(level) => current.with_level_added(level),
            Command::RemoveLevel(level) => current.with_level_removed(level),
            Command::KeepSpookySymbols => current.with_keep_spooky_symbols(true),
            Command::ClearSpookySymbols => current.with_keep_spooky_symbols(false),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
