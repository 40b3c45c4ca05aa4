//! Deterministic random number generation for board construction.
//!
//! The engine itself is fully deterministic; the only randomness in a game
//! is the optional shuffle of the 18 cell codes at construction time. The
//! RNG is seeded so a board layout can be reproduced exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// The same seed always produces the same board shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
