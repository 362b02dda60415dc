//! The spooky text transformation engine.
//!
//! Split into two pieces so the transformation stays deterministic under
//! test:
//!
//! - [`random`] – the one-method [`random::RandomSource`] trait plus the
//!   production implementation backed by the `rand` crate. Tests substitute
//!   stub sources instead of seeding a real RNG.
//! - [`engine`] – the pure [`engine::apply_spooky`] function. All of its
//!   behaviour is a function of its explicit inputs and the injected source.

pub mod engine;
pub mod random;
