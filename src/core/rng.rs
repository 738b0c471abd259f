//! Deterministic random number generation for deals.
//!
//! Same seed, same shuffle, same layout. The engine owns no other source
//! of randomness, so a seed pins an entire game.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for shuffling the deck.
///
/// Uses ChaCha8 for speed with high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
