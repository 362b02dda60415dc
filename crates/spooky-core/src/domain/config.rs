//! Per-user configuration: intensity presets and the preference value object.
//!
//! [`UserConfig`] is immutable — every mutation goes through a `with_*`
//! constructor that returns a new value with one field changed. The command
//! interpreter builds on this copy-on-write contract, and the config store
//! only ever swaps whole values, so a half-updated config can never be
//! observed.
//!
//! # Snapshot wire format
//!
//! A config serializes into the durable snapshot file as:
//!
//! ```json
//! {"levels":["UP","MID"],"effectiveness":"MAX","keepSpookySymbols":false}
//! ```
//!
//! Every field carries a serde default so snapshots written by older builds
//! (or hand-edited files with missing fields) still load.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::glyph::SpookyLevel;

// ── Effectiveness ─────────────────────────────────────────────────────────────

/// Named intensity preset controlling the random range of marks injected per
/// character.
///
/// Each tier is plain data: a `(range, offset)` pair. The number of marks a
/// single character receives from a single level is
/// `offset + uniform(0..range)`, integer-divided by the level's density
/// modifier. The draw itself happens in the transform engine so that the
/// randomness source stays injectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Effectiveness {
    Min,
    Normal,
    Max,
}

impl Effectiveness {
    /// Width of the uniform random range for this tier.
    pub fn range(self) -> u32 {
        match self {
            Effectiveness::Min | Effectiveness::Normal => 8,
            Effectiveness::Max => 16,
        }
    }

    /// Constant added to every draw for this tier.
    pub fn offset(self) -> u32 {
        match self {
            Effectiveness::Min => 0,
            Effectiveness::Normal | Effectiveness::Max => 1,
        }
    }
}

impl Default for Effectiveness {
    fn default() -> Self {
        Effectiveness::Normal
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Effectiveness::Min => "MIN",
            Effectiveness::Normal => "NORMAL",
            Effectiveness::Max => "MAX",
        };
        f.write_str(name)
    }
}

// ── UserConfig ────────────────────────────────────────────────────────────────

/// A user's persisted corruption preferences.
///
/// Equality is structural; there is no identity beyond the field values.
/// `levels` may be empty — the engine then emits text unchanged apart from
/// the stripping pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// The glyph families currently injected. Defaults to `{MID}`.
    #[serde(default = "default_levels")]
    pub levels: BTreeSet<SpookyLevel>,
    /// Intensity preset. Defaults to `NORMAL`.
    #[serde(default)]
    pub effectiveness: Effectiveness,
    /// When `true`, previously-injected marks survive re-application instead
    /// of being stripped first. Defaults to `false`.
    #[serde(rename = "keepSpookySymbols", default)]
    pub keep_spooky_symbols: bool,
}

fn default_levels() -> BTreeSet<SpookyLevel> {
    BTreeSet::from([SpookyLevel::Mid])
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            effectiveness: Effectiveness::default(),
            keep_spooky_symbols: false,
        }
    }
}

impl UserConfig {
    /// Returns a copy with `effectiveness` replaced.
    pub fn with_effectiveness(&self, effectiveness: Effectiveness) -> Self {
        Self {
            effectiveness,
            ..self.clone()
        }
    }

    /// Returns a copy with `level` added to the selection (set union).
    pub fn with_level_added(&self, level: SpookyLevel) -> Self {
        let mut next = self.clone();
        next.levels.insert(level);
        next
    }

    /// Returns a copy with `level` removed from the selection (set difference).
    pub fn with_level_removed(&self, level: SpookyLevel) -> Self {
        let mut next = self.clone();
        next.levels.remove(&level);
        next
    }

    /// Returns a copy with the keep-existing-marks flag replaced.
    pub fn with_keep_spooky_symbols(&self, keep: bool) -> Self {
        Self {
            keep_spooky_symbols: keep,
            ..self.clone()
        }
    }
}

impl fmt::Display for UserConfig {
    /// Renders all field values, used verbatim in command confirmation
    /// replies: `levels=[UP, MID], effectiveness=MAX, keepSpookySymbols=false`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "levels=[")?;
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{level}")?;
        }
        write!(
            f,
            "], effectiveness={}, keepSpookySymbols={}",
            self.effectiveness, self.keep_spooky_symbols
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
