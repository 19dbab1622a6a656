use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound on node height. Slot `i` of the map's head array holds the
/// first node participating at level `i`.
pub const MAX_LEVELS: usize = 32;

/// Seed used by `SkipMap::new`. Fixed so level assignment is reproducible
/// across runs; `SkipMap::with_seed` overrides it.
pub const DEFAULT_SEED: u64 = 123_123;

const P: f64 = 0.5;

/// Draws node heights from a geometric distribution: each additional level
/// is half as likely as the one below it. The RNG is per-instance state,
/// never a process-wide generator.
pub(crate) struct LevelGenerator {
    rng: StdRng,
}

impl LevelGenerator {
    #[inline]
    pub(crate) fn new(seed: u64) -> Self {
        LevelGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Height for a new node, clamped into `[1, MAX_LEVELS]`.
    pub(crate) fn random_level(&mut self) -> usize {
        let u: f64 = self.rng.gen();
        let raw = ((1.0 - u).ln() / P.ln()) as usize;
        raw.max(1).min(MAX_LEVELS)
    }
}
