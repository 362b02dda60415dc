//! Injectable randomness for the transformation engine.
//!
//! The engine needs two kinds of draws: "how many marks for this character"
//! and "which mark from the table". Both reduce to a single primitive — a
//! uniform integer below a bound — so that is the whole trait surface.
//! Production code injects [`ThreadRandom`]; tests inject stubs that pin the
//! draw to a known value.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a uniform draw in `0..bound`.
    ///
    /// `bound` must be non-zero; every caller in this crate draws against a
    /// non-empty range (tier ranges and mark table lengths are fixed at
    /// compile time).
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Production randomness backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
