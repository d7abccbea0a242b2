//! Randomness seam for the draw engine.
//!
//! The engine never touches an RNG directly; it goes through the `Roller`
//! trait so tests can substitute deterministic fakes (a fixed rank, a pinned
//! variance) without mocking the database or the engine itself.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::gacha::rank::{Rank, RankTable};

/// Source of the three random decisions a draw makes.
pub trait Roller: Send + Sync {
    /// Selects a rank by gacha weight.
    fn roll_rank(&mut self, table: &RankTable) -> Rank;

    /// Picks a uniform index into a pool of `len` powers. `len` is always
    /// at least 1; the engine errors on empty pools before picking.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Draws a variance factor uniform over `[-variance, +variance]`.
    fn roll_variance(&mut self, variance: f64) -> f64;
}

/// Production roller backed by a real RNG.
pub struct RandomRoller<R: Rng> {
    rng: R,
}

impl RandomRoller<StdRng> {
    /// Creates a roller seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic roller for simulations and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRoller<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send + Sync> Roller for RandomRoller<R> {
    /// Cumulative-distribution roll over the configured rank weights.
    ///
    /// Draws `r` in `[0, total_weight)` and walks the ranks in configured
    /// order accumulating weight; the first rank whose cumulative sum exceeds
    /// `r` wins. Zero-weight ranks contribute nothing to the sum, so the roll
    /// can never land on them.
    fn roll_rank(&mut self, table: &RankTable) -> Rank {
        let total = table.total_weight();
        let roll = self.rng.random_range(0..total);

        let mut cumulative = 0u64;
        for entry in table.entries() {
            cumulative += u64::from(entry.weight);
            if roll < cumulative {
                return entry.rank;
            }
        }

        // roll < total and the weights sum to total, so the walk always
        // returns inside the loop; the table guarantees total > 0.
        table.lowest()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn roll_variance(&mut self, variance: f64) -> f64 {
        if variance <= 0.0 {
            0.0
        } else {
            self.rng.random_range(-variance..=variance)
        }
    }
}
