//! Random sources for generation.
//!
//! Generators accept any `rand::Rng`; these helpers build the `ChaCha8Rng`
//! the crate uses by default.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a deterministic random source for `seed`.
///
/// The same seed always yields the same sequence, so fixtures generated
/// from it are reproducible.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Returns a random source seeded from the thread-local generator.
#[must_use]
pub fn unseeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}
