//! The corruption engine: combining-mark injection with per-level density.
//!
//! [`apply_spooky`] is the bot's core operation. Given a piece of text and a
//! user's preferences it emits the "spookified" variant:
//!
//! 1. Unless the caller asked to keep existing marks, every character that
//!    belongs to *any* of the three glyph tables is removed first. The strip
//!    covers all three tables regardless of which levels are selected, so
//!    re-applying the transformation resets rather than compounds.
//! 2. Each remaining character is emitted, followed — for every selected
//!    level — by a freshly drawn number of marks sampled with replacement
//!    from that level's table.
//!
//! Repeated application is therefore *not* idempotent when existing marks are
//! kept; the strip pass is what makes the operation restartable.

use std::collections::BTreeSet;

use crate::domain::config::Effectiveness;
use crate::domain::glyph::{is_spooky_mark, SpookyLevel};
use crate::transform::random::RandomSource;

/// Removes every combining mark belonging to any of the three glyph tables.
pub fn strip_spooky(input: &str) -> String {
    input.chars().filter(|c| !is_spooky_mark(*c)).collect()
}

/// Transforms `input` according to the selected `levels`, `effectiveness`
/// tier, and strip policy.
///
/// The per-character mark count for a level is
/// `(offset + uniform(0..range)) / density_modifier` with integer division,
/// drawn fresh for every (character, level) pair. Marks are sampled with
/// replacement, so duplicates within one character are expected.
///
/// Empty `input` produces empty output; empty `levels` produces the
/// (possibly stripped) input unchanged.
pub fn apply_spooky(
    input: &str,
    levels: &BTreeSet<SpookyLevel>,
    effectiveness: Effectiveness,
    keep_existing: bool,
    rng: &mut dyn RandomSource,
) -> String {
    let source = if keep_existing {
        input.to_string()
    } else {
        strip_spooky(input)
    };

    let mut out = String::with_capacity(source.len());
    for c in source.chars() {
        out.push(c);
        for level in levels {
            let drawn = effectiveness.offset() + rng.next_below(effectiveness.range());
            let count = drawn / level.density_modifier();
            let marks = level.marks();
            for _ in 0..count {
                out.push(marks[rng.next_below(marks.len() as u32) as usize]);
            }
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::glyph::{DOWN_MARKS, MID_MARKS, UP_MARKS};

    // ── Test doubles ──────────────────────────────────────────────────────────

    /// Always draws zero: under NORMAL the draw is 1, which floors to 0 marks
    /// for MID (density 2), making output literally predictable.
    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn next_below(&mut self, _bound: u32) -> u32 {
            0
        }
    }

    /// Always draws the maximum: pins every draw to `bound - 1`.
    struct MaxSource;

    impl RandomSource for MaxSource {
        fn next_below(&mut self, bound: u32) -> u32 {
            bound - 1
        }
    }

    fn levels(selection: &[SpookyLevel]) -> BTreeSet<SpookyLevel> {
        selection.iter().copied().collect()
    }

    /// Number of marks appended after each base character, assuming a
    /// single-character input.
    fn marks_per_char(output: &str) -> usize {
        output.chars().filter(|c| is_spooky_mark(*c)).count()
    }

    // ── Stripping ─────────────────────────────────────────────────────────────

    #[test]
    fn test_stripping_is_exhaustive_over_all_three_tables() {
        // Arrange: a string carrying marks from every table
        let mut corrupted = String::new();
        for (i, c) in "boo!".chars().enumerate() {
            corrupted.push(c);
            corrupted.push(UP_MARKS[i]);
            corrupted.push(DOWN_MARKS[i]);
            corrupted.push(MID_MARKS[i]);
        }

        // Act: no levels selected, strip enabled
        let out = apply_spooky(
            &corrupted,
            &levels(&[]),
            Effectiveness::Normal,
            false,
            &mut ZeroSource,
        );

        // Assert
        assert_eq!(out, "boo!");
        assert!(out.chars().all(|c| !is_spooky_mark(c)));
    }

    #[test]
    fn test_strip_covers_unselected_levels_too() {
        // Only UP is selected, but DOWN and MID marks must be stripped as well.
        let corrupted = format!("a{}{}", DOWN_MARKS[0], MID_MARKS[0]);
        let out = apply_spooky(
            &corrupted,
            &levels(&[SpookyLevel::Up]),
            Effectiveness::Min,
            false,
            &mut ZeroSource,
        );
        // MIN with a zero draw injects nothing, so only the base char remains.
        assert_eq!(out, "a");
    }

    #[test]
    fn test_keep_existing_preserves_prior_marks() {
        let corrupted = format!("a{}", UP_MARKS[0]);
        let out = apply_spooky(
            &corrupted,
            &levels(&[]),
            Effectiveness::Normal,
            true,
            &mut ZeroSource,
        );
        assert_eq!(out, corrupted);
    }

    // ── Identity edges ────────────────────────────────────────────────────────

    #[test]
    fn test_empty_input_produces_empty_output() {
        let out = apply_spooky(
            "",
            &levels(&[SpookyLevel::Up, SpookyLevel::Mid]),
            Effectiveness::Max,
            false,
            &mut MaxSource,
        );
        assert_eq!(out, "");
    }

    #[test]
    fn test_empty_levels_is_identity_when_keeping_existing() {
        let input = "ordinary text, nothing spooky";
        let out = apply_spooky(input, &levels(&[]), Effectiveness::Max, true, &mut MaxSource);
        assert_eq!(out, input);
    }

    #[test]
    fn test_default_config_with_zero_draw_is_identity() {
        // NORMAL draws 1, MID divides by 2, floor gives 0 marks per character.
        let input = "spooky";
        let out = apply_spooky(
            input,
            &levels(&[SpookyLevel::Mid]),
            Effectiveness::Normal,
            false,
            &mut ZeroSource,
        );
        assert_eq!(out, input);
    }

    // ── Injection ─────────────────────────────────────────────────────────────

    #[test]
    fn test_every_original_character_is_preserved_in_order() {
        let input = "ghost train";
        let out = apply_spooky(
            input,
            &levels(&[SpookyLevel::Up, SpookyLevel::Down, SpookyLevel::Mid]),
            Effectiveness::Max,
            false,
            &mut MaxSource,
        );

        // Removing the injected marks must recover the input exactly.
        assert_eq!(strip_spooky(&out), input);
        // Marks only append, so the output can never be shorter.
        assert!(out.chars().count() >= input.chars().count());
    }

    #[test]
    fn test_zero_draw_with_up_level_appends_exactly_one_known_mark() {
        // NORMAL: draw = offset(1) + 0 = 1; UP density 1 → one mark per char,
        // and ZeroSource always picks the first table entry.
        let out = apply_spooky(
            "ab",
            &levels(&[SpookyLevel::Up]),
            Effectiveness::Normal,
            false,
            &mut ZeroSource,
        );
        assert_eq!(out, format!("a{m}b{m}", m = UP_MARKS[0]));
    }

    #[test]
    fn test_max_draw_mark_counts_per_tier() {
        // With MaxSource the draw is offset + range - 1.
        let cases = [
            (Effectiveness::Min, 7),    // 0 + 7
            (Effectiveness::Normal, 8), // 1 + 7
            (Effectiveness::Max, 16),   // 1 + 15
        ];
        for (tier, expected) in cases {
            let out = apply_spooky("x", &levels(&[SpookyLevel::Up]), tier, false, &mut MaxSource);
            assert_eq!(
                marks_per_char(&out),
                expected,
                "unexpected mark count for {tier}"
            );
        }
    }

    #[test]
    fn test_density_ordering_mid_is_at_most_half_of_up() {
        // Same tier, max draw every time: MID's density modifier of 2 must
        // halve the per-character mark count relative to UP.
        let up_only = apply_spooky(
            "x",
            &levels(&[SpookyLevel::Up]),
            Effectiveness::Normal,
            false,
            &mut MaxSource,
        );
        let mid_only = apply_spooky(
            "x",
            &levels(&[SpookyLevel::Mid]),
            Effectiveness::Normal,
            false,
            &mut MaxSource,
        );

        assert!(marks_per_char(&mid_only) <= marks_per_char(&up_only) / 2);
    }

    #[test]
    fn test_all_selected_levels_contribute() {
        let out = apply_spooky(
            "x",
            &levels(&[SpookyLevel::Up, SpookyLevel::Down, SpookyLevel::Mid]),
            Effectiveness::Max,
            false,
            &mut MaxSource,
        );

        // MaxSource picks the last table entry of each selected level.
        assert!(out.contains(UP_MARKS[UP_MARKS.len() - 1]));
        assert!(out.contains(DOWN_MARKS[DOWN_MARKS.len() - 1]));
        assert!(out.contains(MID_MARKS[MID_MARKS.len() - 1]));
    }

    #[test]
    fn test_injected_marks_come_only_from_selected_tables() {
        let out = apply_spooky(
            "abc",
            &levels(&[SpookyLevel::Down]),
            Effectiveness::Max,
            false,
            &mut crate::transform::random::ThreadRandom,
        );
        for c in out.chars().filter(|c| is_spooky_mark(*c)) {
            assert!(
                DOWN_MARKS.contains(&c),
                "{c:?} was injected but is not a DOWN mark"
            );
        }
    }

    #[test]
    fn test_thread_random_output_still_strips_back_to_input() {
        // Property check with real randomness: never assert literal output,
        // only the invariant that stripping recovers the original text.
        let input = "Some spooky text for Telegram";
        let out = apply_spooky(
            input,
            &levels(&[SpookyLevel::Up, SpookyLevel::Mid]),
            Effectiveness::Max,
            false,
            &mut crate::transform::random::ThreadRandom,
        );
        assert_eq!(strip_spooky(&out), input);
    }
}
