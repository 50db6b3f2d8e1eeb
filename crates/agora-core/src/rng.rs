//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every random decision in a run — initial placement, attribute sampling,
//! relocation target draws, interaction target selection, synthesis draws —
//! routes through ONE `SimRng` owned by the engine.  Seeding it from
//! `EngineConfig::seed` makes an entire run reproducible: same seed, same
//! hyperparameter sequence, same state after N ticks.
//!
//! The engine is single-threaded by contract, so a single `SmallRng` needs
//! no synchronisation.  The type is `!Sync` to keep it that way.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The engine's single deterministic RNG.
///
/// Wraps `SmallRng` so callers never touch `rand` traits directly and the
/// stream can be re-seeded in one place on `initialize`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Restart the stream from `seed`.  Called by `initialize` so that
    /// `initialize` + N ticks is reproducible without rebuilding the engine.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// `random::<f64>()` is the synthesis draw: uniform in `[0, 1)`, compared
    /// against an UNCLAMPED probability so that values outside `[0, 1]` give
    /// deterministic failure/success.  Do not replace with `gen_bool`, which
    /// clamps.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
