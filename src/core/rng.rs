//! Seeded randomness for referees.
//!
//! A referee draws random numbers in three places: the starting player of
//! an untargeted match, the fallback move for an agent that runs out of
//! attempts, and randomized starting positions. Each referee owns one
//! `GameRng` and hands every match a forked stream, so a tournament
//! replays exactly under the same seed and matches on different referees
//! never share a stream.
//!
//! ```
//! use combinatorial_referee::core::GameRng;
//!
//! let mut referee_rng = GameRng::new(42);
//! let mut first_match = referee_rng.fork();
//! let mut second_match = referee_rng.fork();
//! assert_ne!(first_match.seed(), second_match.seed());
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.fork().gen_range_u32(0..=100), first_match.gen_range_u32(0..=100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream that can split off independent per-match streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Create a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off the stream for the next match.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    /// Uniform draw from an inclusive range.
    pub fn gen_range_u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniform pick from a slice; `None` when it is empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
