//! The three fixed families of Unicode combining marks.
//!
//! Each [`SpookyLevel`] owns an ordered, compile-time-fixed table of combining
//! code points and a density modifier that scales how many marks of that
//! family get injected per character. The tables are disjoint; together they
//! define exactly which characters count as "spooky" for the stripping pass.
//!
//! The `Mid` family renders *through* the base character rather than above or
//! below it, which looks far heavier on screen — hence its density modifier
//! of 2 (half as many marks injected for the same effectiveness draw).

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Mark tables ───────────────────────────────────────────────────────────────

/// Combining marks that stack above the base character.
pub const UP_MARKS: [char; 50] = [
    '\u{30d}', '\u{30e}', '\u{304}', '\u{305}',
    '\u{33f}', '\u{311}', '\u{306}', '\u{310}',
    '\u{352}', '\u{357}', '\u{351}', '\u{307}',
    '\u{308}', '\u{30a}', '\u{342}', '\u{343}',
    '\u{344}', '\u{34a}', '\u{34b}', '\u{34c}',
    '\u{303}', '\u{302}', '\u{30c}', '\u{350}',
    '\u{300}', '\u{301}', '\u{30b}', '\u{30f}',
    '\u{312}', '\u{313}', '\u{314}', '\u{33d}',
    '\u{309}', '\u{363}', '\u{364}', '\u{365}',
    '\u{366}', '\u{367}', '\u{368}', '\u{369}',
    '\u{36a}', '\u{36b}', '\u{36c}', '\u{36d}',
    '\u{36e}', '\u{36f}', '\u{33e}', '\u{35b}',
    '\u{346}', '\u{31a}',
];

/// Combining marks that hang below the base character.
pub const DOWN_MARKS: [char; 40] = [
    '\u{316}', '\u{317}', '\u{318}', '\u{319}',
    '\u{31c}', '\u{31d}', '\u{31e}', '\u{31f}',
    '\u{320}', '\u{324}', '\u{325}', '\u{326}',
    '\u{329}', '\u{32a}', '\u{32b}', '\u{32c}',
    '\u{32d}', '\u{32e}', '\u{32f}', '\u{330}',
    '\u{331}', '\u{332}', '\u{333}', '\u{339}',
    '\u{33a}', '\u{33b}', '\u{33c}', '\u{345}',
    '\u{347}', '\u{348}', '\u{349}', '\u{34d}',
    '\u{34e}', '\u{353}', '\u{354}', '\u{355}',
    '\u{356}', '\u{359}', '\u{35a}', '\u{323}',
];

/// Combining marks that strike through the middle of the base character.
pub const MID_MARKS: [char; 23] = [
    '\u{315}', '\u{31b}', '\u{340}', '\u{341}',
    '\u{358}', '\u{321}', '\u{322}', '\u{327}',
    '\u{328}', '\u{334}', '\u{335}', '\u{336}',
    '\u{34f}', '\u{35c}', '\u{35d}', '\u{35e}',
    '\u{35f}', '\u{360}', '\u{362}', '\u{338}',
    '\u{337}', '\u{361}', '_',
];

// ── SpookyLevel ───────────────────────────────────────────────────────────────

/// One of the three fixed glyph families usable to corrupt text.
///
/// Serialized as `"UP"` / `"DOWN"` / `"MID"` in the durable config snapshot.
/// The derive order (`Up < Down < Mid`) fixes the iteration order of a
/// `BTreeSet<SpookyLevel>`, so mark injection and serialization are
/// deterministic for a given selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpookyLevel {
    Up,
    Down,
    Mid,
}

impl SpookyLevel {
    /// All three levels, in declaration order.
    pub const ALL: [SpookyLevel; 3] = [SpookyLevel::Up, SpookyLevel::Down, SpookyLevel::Mid];

    /// The fixed table of combining marks this level injects from.
    pub fn marks(self) -> &'static [char] {
        match self {
            SpookyLevel::Up => &UP_MARKS,
            SpookyLevel::Down => &DOWN_MARKS,
            SpookyLevel::Mid => &MID_MARKS,
        }
    }

    /// Divisor applied to the effectiveness draw for this level.
    pub fn density_modifier(self) -> u32 {
        match self {
            SpookyLevel::Up | SpookyLevel::Down => 1,
            SpookyLevel::Mid => 2,
        }
    }
}

impl fmt::Display for SpookyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpookyLevel::Up => "UP",
            SpookyLevel::Down => "DOWN",
            SpookyLevel::Mid => "MID",
        };
        f.write_str(name)
    }
}

/// Returns `true` if `c` belongs to any of the three mark tables.
///
/// The stripping pass removes every such character, regardless of which
/// levels are currently selected.
pub fn is_spooky_mark(c: char) -> bool {
    SpookyLevel::ALL.iter().any(|level| level.marks().contains(&c))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
